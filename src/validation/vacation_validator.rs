//! Vacation batch validation.
//!
//! Each candidate row is checked for parseable dates, a non-inverted
//! interval, and overlap with the already-accepted vacations of the same
//! employee.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::DateRange;
use crate::models::Vacation;

use super::report::{IssueKind, ValidationIssue, ValidationReport};

/// Options controlling batch validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Also check each candidate against the earlier candidates of the same
    /// batch. Off by default: two overlapping rows pasted together both pass.
    pub check_within_batch: bool,
}

/// Validates a batch of candidate vacations against the accepted ones.
///
/// Rows are checked independently, in order, against the same `accepted`
/// list; candidates are not compared with each other. Rows are numbered
/// from 1 in the returned messages. For each row:
///
/// 1. If either date is unparseable, `Invalid date format` is reported and
///    the row's other checks are skipped.
/// 2. If the start lies after the end, `Start date must be before end date`
///    is reported and the overlap check still runs.
/// 3. If any accepted vacation of the same employee (with parseable dates)
///    shares a day with the row, `Overlapping vacation dates` is reported
///    once.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::{Vacation, VacationType};
/// use vacation_ledger::validation::validate_vacations;
///
/// let accepted = vec![Vacation::new(VacationType::Regular, "E1", "Ana", "2024-01-10", "2024-01-15")];
/// let candidates = vec![Vacation::new(VacationType::Regular, "E1", "Ana", "2024-01-14", "2024-01-20")];
///
/// let report = validate_vacations(&candidates, &accepted);
/// assert_eq!(report.messages(), vec!["Row 1: Overlapping vacation dates"]);
/// ```
pub fn validate_vacations(candidates: &[Vacation], accepted: &[Vacation]) -> ValidationReport {
    validate_vacations_with(candidates, accepted, &ValidationOptions::default())
}

/// Validates a batch with explicit [`ValidationOptions`].
///
/// With `check_within_batch` set, a row is also reported as overlapping when
/// it shares a day with an earlier row of the same employee in the batch
/// whose dates parse and are in order.
pub fn validate_vacations_with(
    candidates: &[Vacation],
    accepted: &[Vacation],
    options: &ValidationOptions,
) -> ValidationReport {
    let accepted_ranges: Vec<(&str, DateRange)> = accepted
        .iter()
        .filter_map(|v| v.interval().map(|range| (v.employee_id.as_str(), range)))
        .collect();

    let mut batch_ranges: Vec<(&str, DateRange)> = Vec::new();
    let mut report = ValidationReport::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let row = index + 1;

        let Some(range) = candidate.interval() else {
            report.push(ValidationIssue::new(row, IssueKind::InvalidDateFormat));
            continue;
        };

        if range.is_inverted() {
            report.push(ValidationIssue::new(row, IssueKind::InvertedInterval));
        }

        let employee_id = candidate.employee_id.as_str();
        let conflicts = |(id, existing): &(&str, DateRange)| {
            *id == employee_id && range.overlaps(existing)
        };

        let overlapping = accepted_ranges.iter().any(conflicts)
            || (options.check_within_batch && batch_ranges.iter().any(conflicts));

        if overlapping {
            debug!(row, employee_id, "Candidate overlaps an existing vacation");
            report.push(ValidationIssue::new(row, IssueKind::Overlap));
        }

        if options.check_within_batch && !range.is_inverted() {
            batch_ranges.push((employee_id, range));
        }
    }

    report
}
