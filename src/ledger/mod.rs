//! The vacation ledger state holder.
//!
//! This module ties the pieces together: imports are parsed and validated,
//! accepted batches are saved through the blob store, and views are computed
//! from the in-memory lists.

mod outcome;
mod state;

pub use outcome::{ImportOutcome, ImportPreview};
pub use state::VacationLedger;
