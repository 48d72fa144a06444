//! Loading and saving whole collections as JSON blobs.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};

use super::blob_store::BlobStore;

/// Blob name holding the vacation list.
pub const VACATIONS_BLOB: &str = "vacations";

/// Blob name holding the employee list.
pub const EMPLOYEES_BLOB: &str = "employees";

/// Serializes `value` as JSON and stores it under `name`.
///
/// # Example
///
/// ```
/// use vacation_ledger::storage::{MemoryBlobStore, load, save};
///
/// let mut store = MemoryBlobStore::new();
/// save(&mut store, "numbers", &vec![1, 2, 3])?;
/// let numbers: Vec<i32> = load(&store, "numbers")?;
/// assert_eq!(numbers, vec![1, 2, 3]);
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
pub fn save<S, T>(store: &mut S, name: &str, value: &T) -> LedgerResult<()>
where
    S: BlobStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| LedgerError::Serialization {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    store.set(name, &json)
}

/// Loads the list stored under `name`.
///
/// An absent blob yields an empty list. A blob that is not a valid JSON list
/// of `T` is logged and also yields an empty list. Only a store that cannot
/// be read is an error.
pub fn load<S, T>(store: &S, name: &str) -> LedgerResult<Vec<T>>
where
    S: BlobStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(json) = store.get(name)? else {
        debug!(blob = name, "Blob not found, starting empty");
        return Ok(Vec::new());
    };

    match serde_json::from_str(&json) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(blob = name, error = %e, "Stored blob is corrupt, starting empty");
            Ok(Vec::new())
        }
    }
}
