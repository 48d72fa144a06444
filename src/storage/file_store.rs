//! File-backed blob store.
//!
//! Each blob lives in `<data_dir>/<name>.json`. A save writes a sibling
//! temporary file and renames it over the blob, so readers see either the
//! old or the new snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};

use super::blob_store::BlobStore;

/// A [`BlobStore`] keeping one JSON file per blob in a directory.
///
/// # Example
///
/// ```no_run
/// use vacation_ledger::storage::{BlobStore, FileBlobStore};
///
/// let mut store = FileBlobStore::open("./data")?;
/// store.set("vacations", "[]")?;
/// assert_eq!(store.get("vacations")?.as_deref(), Some("[]"));
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    data_dir: PathBuf,
}

impl FileBlobStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> LedgerResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| LedgerError::Storage {
                name: data_dir.display().to_string(),
                message: format!("cannot create data directory: {}", e),
            })?;
            info!(data_dir = %data_dir.display(), "Created data directory");
        }

        Ok(Self { data_dir })
    }

    /// The directory blobs are stored in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The file a blob is stored in.
    pub fn blob_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, name: &str) -> LedgerResult<Option<String>> {
        match fs::read_to_string(self.blob_path(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::Storage {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> LedgerResult<()> {
        let path = self.blob_path(name);
        let tmp_path = self.data_dir.join(format!(".{}.json.tmp", name));
        let storage_error = |e: std::io::Error| LedgerError::Storage {
            name: name.to_string(),
            message: e.to_string(),
        };

        fs::write(&tmp_path, value).map_err(storage_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_error)?;

        debug!(blob = name, bytes = value.len(), "Wrote blob");
        Ok(())
    }
}
