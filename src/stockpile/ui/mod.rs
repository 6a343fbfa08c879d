//! # Terminal UI
//!
//! Building blocks for the interactive menu: a [`Screen`] that pairs a key
//! source with an output sink, and the prompts built on top of it.
//!
//! Output always ends lines with `\r\n`, since the terminal is in raw mode
//! while the menu runs. Keys come through the [`keys::KeySource`] trait so
//! every prompt can be driven by [`keys::ScriptedKeys`] in tests.

use crate::error::{Result, StockError};
use crossterm::cursor::{MoveTo, MoveToPreviousLine};
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;

pub mod keys;
pub mod prompt;
pub mod select;
pub mod styles;
pub mod table;

use keys::{CancelToken, Key, KeySource};

/// How much room redraws may assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// No limit; output is not a terminal.
    Unbounded,
    /// Columns and rows.
    Fixed(u16, u16),
    /// Whatever size the terminal has right now.
    Terminal,
}

impl Viewport {
    /// Columns and rows, if there is a limit.
    pub fn size(&self) -> Option<(u16, u16)> {
        match self {
            Viewport::Unbounded => None,
            Viewport::Fixed(cols, rows) => Some((*cols, *rows)),
            Viewport::Terminal => crossterm::terminal::size().ok(),
        }
    }
}

pub struct Screen<K: KeySource, W: Write> {
    keys: K,
    out: W,
    cancel: CancelToken,
    viewport: Viewport,
}

impl<K: KeySource, W: Write> Screen<K, W> {
    pub fn new(keys: K, out: W, cancel: CancelToken) -> Self {
        Self {
            keys,
            out,
            cancel,
            viewport: Viewport::Unbounded,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.viewport.size()
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.out)
    }

    /// Block until the next keystroke, or fail with `Interrupted` once cancelled.
    pub fn read_key(&mut self) -> Result<Key> {
        self.keys.next_key(&self.cancel)
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(StockError::Terminal)
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.newline()
    }

    pub fn newline(&mut self) -> Result<()> {
        self.write("\r\n")
    }

    pub fn clear(&mut self) -> Result<()> {
        crossterm::queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .and_then(|_| self.out.flush())
            .map_err(StockError::Terminal)
    }

    /// Move up `count` lines and wipe everything from there down.
    pub fn erase_lines(&mut self, count: u16) -> Result<()> {
        crossterm::queue!(
            self.out,
            MoveToPreviousLine(count),
            Clear(ClearType::FromCursorDown)
        )
        .and_then(|_| self.out.flush())
        .map_err(StockError::Terminal)
    }
}
