use super::TableBackend;
use crate::error::{StockError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(StockError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "table".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl TableBackend for FileBackend {
    fn read_table(&self) -> Result<String> {
        if !self.path.exists() {
            self.ensure_parent()?;
            fs::write(&self.path, "").map_err(StockError::Io)?;
            debug!(path = %self.path.display(), "created empty table");
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(StockError::Io)
    }

    fn write_table(&self, contents: &str) -> Result<()> {
        self.ensure_parent()?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents).map_err(StockError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StockError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("items.csv"));

        assert_eq!(backend.read_table().unwrap(), "");
        assert!(dir.path().join("items.csv").exists());
    }

    #[test]
    fn read_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("groups.csv");
        let backend = FileBackend::new(&path);

        backend.read_table().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_replaces_contents_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("items.csv"));

        backend.write_table("first\n").unwrap();
        backend.write_table("second\n").unwrap();
        assert_eq!(backend.read_table().unwrap(), "second\n");

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn location_is_absolute() {
        let backend = FileBackend::new("items.csv");
        assert!(backend.location().is_absolute());
        assert!(backend.location().ends_with("items.csv"));
    }
}
