use super::TableBackend;
use crate::error::{StockError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory table backend for testing.
///
/// Uses `RefCell` so `TableBackend` can keep `&self` for every method;
/// stockpile is single-threaded.
pub struct MemBackend {
    name: String,
    contents: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: RefCell::new(None),
            simulate_write_error: Cell::new(false),
        }
    }

    /// Start from existing table text, as if read from disk.
    pub fn with_contents(self, contents: impl Into<String>) -> Self {
        *self.contents.borrow_mut() = Some(contents.into());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw table text, `None` if the table was never created.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl TableBackend for MemBackend {
    fn read_table(&self) -> Result<String> {
        let mut contents = self.contents.borrow_mut();
        Ok(contents.get_or_insert_with(String::new).clone())
    }

    fn write_table(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::Store(format!(
                "simulated write failure for {}",
                self.name
            )));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(format!("memory://{}", self.name))
    }
}
