use crate::error::{Result, StockError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const KEY_POLL_MILLIS: u64 = 200;

/// The keystrokes prompts care about. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Char(c)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::Char(c)
            }
            _ => Key::Other,
        }
    }
}

/// Shared flag that asks any pending key read to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where keystrokes come from.
///
/// Implementations check `cancel` before handing out each key and return
/// `StockError::Interrupted` once it is set.
pub trait KeySource {
    fn next_key(&mut self, cancel: &CancelToken) -> Result<Key>;
}

/// Keys from the real terminal. Expects raw mode (see [`RawModeGuard`]).
///
/// Ctrl-C sets the cancel token, since raw mode swallows the signal.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, cancel: &CancelToken) -> Result<Key> {
        loop {
            if cancel.is_cancelled() {
                return Err(StockError::Interrupted);
            }
            if !event::poll(Duration::from_millis(KEY_POLL_MILLIS)).map_err(StockError::Terminal)? {
                continue;
            }
            let Event::Key(key) = event::read().map_err(StockError::Terminal)? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                cancel.cancel();
                return Err(StockError::Interrupted);
            }
            return Ok(Key::from(key));
        }
    }
}

/// Pre-recorded keys, for driving prompts in tests.
///
/// Running out of keys counts as an interruption.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn key(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn repeat(mut self, key: Key, times: usize) -> Self {
        self.keys.extend(std::iter::repeat(key).take(times));
        self
    }

    /// Each character of `text` as a separate keystroke.
    pub fn text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    /// `text` followed by Enter.
    pub fn line(self, text: &str) -> Self {
        self.text(text).key(Key::Enter)
    }

    /// Append another script after this one.
    pub fn then(mut self, next: ScriptedKeys) -> Self {
        self.keys.extend(next.keys);
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, cancel: &CancelToken) -> Result<Key> {
        if cancel.is_cancelled() {
            return Err(StockError::Interrupted);
        }
        self.keys.pop_front().ok_or(StockError::Interrupted)
    }
}

/// Raw mode plus the alternate screen for as long as the guard lives.
pub struct RawModeGuard {
    restore: fn(),
}

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        Self::enable_with(
            enable_raw_mode,
            || crossterm::execute!(stdout(), EnterAlternateScreen),
            restore_terminal,
        )
    }

    fn enable_with(
        raw: impl FnOnce() -> io::Result<()>,
        alternate: impl FnOnce() -> io::Result<()>,
        restore: fn(),
    ) -> Result<Self> {
        raw().map_err(StockError::Terminal)?;
        // Once raw mode is on, every exit path goes through the guard's drop.
        let guard = Self { restore };
        alternate().map_err(StockError::Terminal)?;
        Ok(guard)
    }
}

fn restore_terminal() {
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RESTORED_AFTER_SCREEN_FAILURE: AtomicBool = AtomicBool::new(false);
    static RESTORED_AFTER_RAW_FAILURE: AtomicBool = AtomicBool::new(false);

    fn failure() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "not a terminal"))
    }

    #[test]
    fn failed_screen_switch_still_restores_raw_mode() {
        let guard = RawModeGuard::enable_with(
            || Ok(()),
            failure,
            || RESTORED_AFTER_SCREEN_FAILURE.store(true, Ordering::SeqCst),
        );
        assert!(matches!(guard, Err(StockError::Terminal(_))));
        assert!(RESTORED_AFTER_SCREEN_FAILURE.load(Ordering::SeqCst));
    }

    #[test]
    fn failed_raw_mode_has_nothing_to_restore() {
        let guard = RawModeGuard::enable_with(
            failure,
            || Ok(()),
            || RESTORED_AFTER_RAW_FAILURE.store(true, Ordering::SeqCst),
        );
        assert!(guard.is_err());
        assert!(!RESTORED_AFTER_RAW_FAILURE.load(Ordering::SeqCst));
    }

    #[test]
    fn translates_terminal_keys() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Key::from(plain(KeyCode::Char('a'))), Key::Char('a'));
        assert_eq!(
            Key::from(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Key::Char('A')
        );
        assert_eq!(Key::from(plain(KeyCode::Esc)), Key::Escape);
        assert_eq!(Key::from(plain(KeyCode::Backspace)), Key::Backspace);
        assert_eq!(Key::from(plain(KeyCode::Tab)), Key::Other);
        assert_eq!(
            Key::from(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Key::Other
        );
    }

    #[test]
    fn scripted_keys_run_out_as_interruption() {
        let cancel = CancelToken::new();
        let mut keys = ScriptedKeys::default().line("ab");
        assert_eq!(keys.remaining(), 3);
        assert_eq!(keys.next_key(&cancel).unwrap(), Key::Char('a'));
        assert_eq!(keys.next_key(&cancel).unwrap(), Key::Char('b'));
        assert_eq!(keys.next_key(&cancel).unwrap(), Key::Enter);
        assert!(matches!(
            keys.next_key(&cancel),
            Err(StockError::Interrupted)
        ));
    }

    #[test]
    fn cancelled_token_stops_reads() {
        let cancel = CancelToken::new();
        let mut keys = ScriptedKeys::default().text("abc");
        cancel.clone().cancel();
        assert!(matches!(
            keys.next_key(&cancel),
            Err(StockError::Interrupted)
        ));
        assert_eq!(keys.remaining(), 3);
    }
}
