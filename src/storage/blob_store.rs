//! The blob store abstraction.

use crate::error::LedgerResult;

/// A key-value store of named text blobs.
///
/// Each `set` replaces the whole blob; there is no partial write.
/// Implementations report unreadable or unwritable storage as
/// [`LedgerError::Storage`](crate::error::LedgerError::Storage).
pub trait BlobStore {
    /// Returns the blob stored under `name`, or `None` if there is none.
    fn get(&self, name: &str) -> LedgerResult<Option<String>>;

    /// Stores `value` under `name`, replacing any previous blob.
    fn set(&mut self, name: &str, value: &str) -> LedgerResult<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, name: &str) -> LedgerResult<Option<String>> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) -> LedgerResult<()> {
        (**self).set(name, value)
    }
}
