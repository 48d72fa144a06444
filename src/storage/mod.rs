//! Persistence of the vacation and employee lists.
//!
//! Both lists are stored as whole JSON snapshots under the names
//! [`VACATIONS_BLOB`] and [`EMPLOYEES_BLOB`] in a [`BlobStore`]. Every save
//! replaces the previous snapshot; the last write wins.

mod blob_store;
mod file_store;
mod memory_store;
mod persistence;

pub use blob_store::BlobStore;
pub use file_store::FileBlobStore;
pub use memory_store::MemoryBlobStore;
pub use persistence::{EMPLOYEES_BLOB, VACATIONS_BLOB, load, save};
