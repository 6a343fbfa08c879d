use super::TableBackend;
use crate::error::{StockError, Result};
use crate::model::Record;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Typed view of one table: maps rows to `T` records and back.
pub struct RecordStore<T: Record, B: TableBackend> {
    backend: B,
    _record: PhantomData<T>,
}

impl<T: Record, B: TableBackend> RecordStore<T, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Every record in table order. A missing table is created and reads as empty.
    pub fn load(&self) -> Result<Vec<T>> {
        decode(&self.backend.read_table()?)
    }

    /// Replace the table with a fresh header and `records`, in order.
    pub fn store(&self, records: &[T]) -> Result<()> {
        let text = encode(records)?;
        self.backend.write_table(&text)
    }

    /// Truncate the table to nothing, not even a header.
    pub fn clear(&self) -> Result<()> {
        self.backend.write_table("")
    }
}

pub fn encode<T: Record>(records: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(T::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StockError::Store(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StockError::Store(e.to_string()))
}

pub fn decode<T: Record>(text: &str) -> Result<Vec<T>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if !headers.iter().eq(T::COLUMNS.iter().copied()) {
        return Err(StockError::Store(format!(
            "unexpected header row: expected {}, found {}",
            T::COLUMNS.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    Ok(records)
}
