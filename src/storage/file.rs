//! File-backed record storage.
//!
//! Each store owns one JSON document: a bare array of records, UTF-8,
//! pretty-printed. Writes are atomic via temp file + rename. Loads are
//! tolerant: a missing file or a non-array document yields an empty
//! collection, and entries that fail to decode are skipped with a warning
//! rather than poisoning the rest of the collection.

use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{LexiError, Result};
use crate::storage::RecordStore;
use crate::util::read_to_string_limited;

/// File-backed store for one JSON array document.
#[derive(Debug)]
pub struct FileRecordStore<T> {
    /// Path of the backing document.
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> FileRecordStore<T> {
    /// Create a store backed by the given path.
    ///
    /// The parent directory is created if it doesn't exist. The document
    /// itself is only created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| LexiError::storage(parent, e))?;
            }
        }

        Ok(Self {
            path,
            _records: PhantomData,
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Path of the temp file used during atomic writes.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "store".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl<T> RecordStore<T> for FileRecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = read_to_string_limited(&self.path)?;
        let document: serde_json::Value = serde_json::from_str(&content)?;

        let Some(entries) = document.as_array() else {
            tracing::warn!(
                "{}: expected a JSON array, found something else; treating as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match serde_json::from_value(entry.clone()) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "{}: skipping undecodable entry {}: {}",
                        self.path.display(),
                        index,
                        e
                    );
                }
            }
        }

        Ok(records)
    }

    fn save(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let temp_path = self.temp_path();

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| LexiError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| LexiError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| LexiError::storage(&temp_path, e))?;
        }

        // Rename temp file to final path (atomic on POSIX)
        fs::rename(&temp_path, &self.path).map_err(|e| LexiError::storage(&self.path, e))?;

        Ok(())
    }
}
