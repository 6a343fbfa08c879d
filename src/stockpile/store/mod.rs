//! # Storage Layer
//!
//! Two flat tables back the inventory: items and groups. Each table is a CSV
//! document with a header row followed by one row per record.
//!
//! The layer is split the same way for both tables:
//!
//! - [`TableBackend`]: raw table text I/O ("where do the bytes live")
//!   - [`fs::FileBackend`]: production, one file per table
//!   - [`memory::MemBackend`]: in-memory, for tests
//! - [`table::RecordStore`]: typed load/store/clear over any backend
//!   ("how do rows map to records")
//!
//! ## Whole-table rewrites
//!
//! There is no incremental update. Every read parses the full table and every
//! write replaces it. The file backend writes to a temporary sibling and renames
//! it over the target, so a failed write leaves the previous table intact.
//!
//! ## Concurrency
//!
//! Nothing is locked. Two processes that read, modify and write the same table
//! at the same time will lose one of the updates. Single-writer use is assumed.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod table;

pub use table::RecordStore;

/// Abstract interface for raw table I/O.
pub trait TableBackend {
    /// Read the whole table text. A table that does not exist yet is created
    /// empty and read as "".
    fn read_table(&self) -> Result<String>;

    /// Replace the whole table text.
    /// MUST be atomic: either the new text is in place or the old one is.
    fn write_table(&self, contents: &str) -> Result<()>;

    /// Where the table lives. For FileBackend an absolute path, for MemBackend
    /// a virtual one.
    fn location(&self) -> PathBuf;
}
