//! Validation of candidate vacations before they are accepted.
//!
//! Validation never fails: every problem found is collected as a row-scoped
//! [`ValidationIssue`] and the batch is only accepted when none were found.

mod report;
mod vacation_validator;

pub use report::{IssueKind, ValidationIssue, ValidationReport};
pub use vacation_validator::{ValidationOptions, validate_vacations, validate_vacations_with};
