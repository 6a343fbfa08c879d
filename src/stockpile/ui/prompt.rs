//! Line and keystroke prompts.
//!
//! [`TextPrompt`] reads one line a key at a time. Escape abandons the prompt and
//! yields `Ok(None)`, which is different from `Ok(Some(""))`. An external
//! cancel surfaces as `Err(StockError::Interrupted)` and never carries partial
//! input.

use super::keys::{Key, KeySource};
use super::styles::STOCK_THEME;
use super::Screen;
use crate::error::Result;
use std::io::Write;

const ERASE_CHAR: &str = "\x08 \x08";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadState {
    Reading,
    Done(String),
    Cancelled,
}

/// What the terminal should show in response to a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Nothing,
    Char(char),
    Erase,
}

/// Line editing state: the text typed so far.
#[derive(Debug, Default)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feed(&mut self, key: Key) -> (ReadState, Echo) {
        match key {
            Key::Escape => (ReadState::Cancelled, Echo::Nothing),
            Key::Enter => (ReadState::Done(std::mem::take(&mut self.text)), Echo::Nothing),
            Key::Backspace => match self.text.pop() {
                Some(_) => (ReadState::Reading, Echo::Erase),
                None => (ReadState::Reading, Echo::Nothing),
            },
            Key::Char(c) if !c.is_control() => {
                self.text.push(c);
                (ReadState::Reading, Echo::Char(c))
            }
            _ => (ReadState::Reading, Echo::Nothing),
        }
    }
}

/// Read keys until Enter or Escape, echoing edits as they happen.
pub fn read_line<K: KeySource, W: Write>(screen: &mut Screen<K, W>) -> Result<Option<String>> {
    let mut buffer = LineBuffer::new();
    loop {
        let key = screen.read_key()?;
        let (state, echo) = buffer.feed(key);
        match echo {
            Echo::Nothing => {}
            Echo::Char(c) => screen.write(c.encode_utf8(&mut [0; 4]))?,
            Echo::Erase => screen.write(ERASE_CHAR)?,
        }
        match state {
            ReadState::Reading => continue,
            ReadState::Done(text) => return Ok(Some(text)),
            ReadState::Cancelled => return Ok(None),
        }
    }
}

/// A labelled single-line text prompt.
///
/// Blank input (empty or only whitespace) is replaced by the default when one
/// is set, returned as typed when `allow_empty` is set, and otherwise ignored
/// until something else is entered.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    label: String,
    default: Option<String>,
    allow_empty: bool,
}

impl TextPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: None,
            allow_empty: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn show<K: KeySource, W: Write>(&self, screen: &mut Screen<K, W>) -> Result<Option<String>> {
        screen.newline()?;
        screen.write(&format!("{} ", self.label))?;

        loop {
            let Some(input) = read_line(screen)? else {
                screen.newline()?;
                return Ok(None);
            };

            if input.trim().is_empty() {
                if let Some(default) = &self.default {
                    screen.line(default)?;
                    return Ok(Some(default.clone()));
                }
                if !self.allow_empty {
                    continue;
                }
            }

            screen.newline()?;
            return Ok(Some(input));
        }
    }
}

/// "Press any key to continue..." gate. Any keystroke at all releases it.
#[derive(Debug, Default)]
pub struct ContinuePrompt;

impl ContinuePrompt {
    pub fn show<K: KeySource, W: Write>(&self, screen: &mut Screen<K, W>) -> Result<()> {
        screen.line("Press any key to continue...")?;
        screen.read_key()?;
        Ok(())
    }
}

/// Yes/no question. Only "y" or "yes" (any case) confirms; anything else,
/// including Escape, declines.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    question: String,
}

impl ConfirmPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    pub fn show<K: KeySource, W: Write>(&self, screen: &mut Screen<K, W>) -> Result<bool> {
        let answer = TextPrompt::new(format!("{} [y/n]", self.question)).show(screen)?;
        Ok(answer
            .map(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }
}

/// Asks until a positive whole number is entered, or Escape is pressed.
#[derive(Debug, Clone)]
pub struct QuantityPrompt {
    label: String,
}

impl QuantityPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn show<K: KeySource, W: Write>(&self, screen: &mut Screen<K, W>) -> Result<Option<i64>> {
        let prompt = TextPrompt::new(self.label.clone());
        loop {
            let Some(text) = prompt.show(screen)? else {
                return Ok(None);
            };
            match text.trim().parse::<i64>() {
                Ok(quantity) if quantity > 0 => return Ok(Some(quantity)),
                _ => screen.line(
                    &STOCK_THEME
                        .error
                        .apply_to("Please enter a positive whole number.")
                        .to_string(),
                )?,
            }
        }
    }
}
