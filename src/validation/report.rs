//! Row-scoped validation issues and the report that collects them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of problem found in a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum IssueKind {
    /// A start or end date is not in any accepted layout.
    InvalidDateFormat,
    /// The start date lies after the end date.
    InvertedInterval,
    /// The interval intersects another vacation of the same employee.
    Overlap,
    /// A required import column is absent or empty.
    MissingColumn(String),
    /// The type column does not name a vacation type.
    UnknownType(String),
}

/// A problem found in one row of a batch.
///
/// Displays as the message shown to the person importing, e.g.
/// `Row 3: Overlapping vacation dates`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 1-based position of the row in its batch.
    pub row: usize,
    /// What is wrong with the row.
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Creates an issue for a 1-based row.
    pub fn new(row: usize, kind: IssueKind) -> Self {
        Self { row, kind }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: ", self.row)?;
        match &self.kind {
            IssueKind::InvalidDateFormat => f.write_str("Invalid date format"),
            IssueKind::InvertedInterval => f.write_str("Start date must be before end date"),
            IssueKind::Overlap => f.write_str("Overlapping vacation dates"),
            IssueKind::MissingColumn(column) => {
                write!(f, "Missing required column '{}'", column)
            }
            IssueKind::UnknownType(value) => write!(f, "Unknown vacation type '{}'", value),
        }
    }
}

/// The issues found in a batch, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns true when no issue was found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The issues, in the order they were found.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The human-readable messages, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true when the report holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl From<Vec<ValidationIssue>> for ValidationReport {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
