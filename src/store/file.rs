use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::Item;
use crate::store::{decode, encode, PersistenceStore, StoreError, STORAGE_KEY};

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default store location.
    ///
    /// Uses `<data_dir>/stockroom/inventory_items_v1.json` via
    /// `dirs::data_dir()`, falling back to the current directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir
            .join("stockroom")
            .join(format!("{}.json", STORAGE_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::WriteError {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersistenceStore for FileStore {
    fn get(&self) -> Option<Vec<Item>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to read store file, treating as empty"
                );
                None
            }
        }
    }

    fn set(&self, items: &[Item]) -> Result<(), StoreError> {
        let raw = encode(items)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        // Write to a sibling temp file first so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        if let Err(err) = fs::write(&tmp, raw).and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(err));
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::ClearError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
