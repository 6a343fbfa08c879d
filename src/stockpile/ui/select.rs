use super::keys::{Key, KeySource};
use super::styles::STOCK_THEME;
use super::Screen;
use crate::error::Result;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows kept free below the list: the cursor line, plus one for the title.
const RESERVED_ROWS: u16 = 2;
/// Width of the "> " / "  " marker in front of each choice.
const MARKER_WIDTH: usize = 2;

/// Pick one entry from a list with the arrow keys (or j/k) and Enter.
///
/// Escape abandons the choice and yields `Ok(None)`. On a sized screen only
/// as many choices as fit are drawn, scrolling with the selection, and each
/// is cut to one row so the redraw knows exactly what to erase.
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    title: String,
    choices: Vec<String>,
}

impl SelectPrompt {
    pub fn new(title: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            title: title.into(),
            choices,
        }
    }

    pub fn show<K: KeySource, W: Write>(&self, screen: &mut Screen<K, W>) -> Result<Option<usize>> {
        if self.choices.is_empty() {
            return Ok(None);
        }

        let count = self.choices.len();
        let mut selected = 0;
        let mut offset = 0;
        screen.newline()?;
        screen.line(&STOCK_THEME.heading.apply_to(&self.title).to_string())?;
        let mut drawn = self.render(screen, selected, &mut offset)?;

        loop {
            let previous = selected;
            match screen.read_key()? {
                Key::Up | Key::Char('k') => selected = (selected + count - 1) % count,
                Key::Down | Key::Char('j') => selected = (selected + 1) % count,
                Key::Enter => return Ok(Some(selected)),
                Key::Escape => return Ok(None),
                _ => {}
            }
            if selected != previous {
                let rows = match screen.size() {
                    Some((_, rows)) => drawn.min(rows.saturating_sub(1)),
                    None => drawn,
                };
                if rows > 0 {
                    screen.erase_lines(rows)?;
                }
                drawn = self.render(screen, selected, &mut offset)?;
            }
        }
    }

    /// Draw the window of choices around `selected`, returning the rows used.
    fn render<K: KeySource, W: Write>(
        &self,
        screen: &mut Screen<K, W>,
        selected: usize,
        offset: &mut usize,
    ) -> Result<u16> {
        let (visible, width) = match screen.size() {
            Some((cols, rows)) => (
                usize::from(rows.saturating_sub(RESERVED_ROWS)).max(1),
                Some(usize::from(cols).saturating_sub(MARKER_WIDTH + 1)),
            ),
            None => (self.choices.len(), None),
        };
        *offset = scroll(*offset, selected, visible);

        let window = self.choices.iter().enumerate().skip(*offset).take(visible);
        let mut drawn = 0;
        for (i, choice) in window {
            let label = match width {
                Some(width) => truncate_to_width(choice, width),
                None => choice.clone(),
            };
            if i == selected {
                screen.line(&STOCK_THEME.selected.apply_to(format!("> {}", label)).to_string())?;
            } else {
                screen.line(&format!("  {}", label))?;
            }
            drawn += 1;
        }
        Ok(drawn)
    }
}

/// First visible index, moved only as far as needed to keep `selected` shown.
fn scroll(offset: usize, selected: usize, visible: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
