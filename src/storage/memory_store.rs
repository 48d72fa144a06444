//! In-memory blob store.

use std::collections::HashMap;

use crate::error::LedgerResult;

use super::blob_store::BlobStore;

/// A [`BlobStore`] that keeps blobs in a map.
///
/// Nothing survives the process; used for tests and for embedding the ledger
/// where the caller persists blobs itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `(name, blob)` pairs.
    pub fn with_blobs<I, K, V>(blobs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            blobs: blobs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, name: &str) -> LedgerResult<Option<String>> {
        Ok(self.blobs.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> LedgerResult<()> {
        self.blobs.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
