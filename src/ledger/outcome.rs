//! Results of import attempts.

use serde::{Deserialize, Serialize};

use crate::import::ImportBatch;
use crate::models::Vacation;
use crate::validation::ValidationReport;

/// What an import attempt did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ImportOutcome {
    /// Every row was accepted and persisted.
    Committed {
        /// Number of vacations added.
        count: usize,
    },
    /// At least one row had a problem; nothing was added.
    Rejected {
        /// One message per problem, in row order.
        errors: Vec<String>,
    },
}

impl ImportOutcome {
    /// Returns true if the batch was committed.
    pub fn is_committed(&self) -> bool {
        matches!(self, ImportOutcome::Committed { .. })
    }

    /// The rejection messages; empty when committed.
    pub fn errors(&self) -> &[String] {
        match self {
            ImportOutcome::Committed { .. } => &[],
            ImportOutcome::Rejected { errors } => errors,
        }
    }
}

/// A dry run of an import: the parsed rows and every problem found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreview {
    /// Rows read from the pasted text.
    pub batch: ImportBatch,
    /// Date and overlap problems of the converted rows.
    ///
    /// Only computed when every row converted, so row numbers match the
    /// pasted text.
    pub validation: ValidationReport,
}

impl ImportPreview {
    /// The vacations that would be added.
    pub fn vacations(&self) -> &[Vacation] {
        &self.batch.vacations
    }

    /// Every message, import problems first.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = self.batch.issues.messages();
        errors.extend(self.validation.messages());
        errors
    }

    /// Returns true if importing would commit at least one row.
    pub fn can_import(&self) -> bool {
        self.batch.is_clean() && self.validation.is_valid() && !self.batch.vacations.is_empty()
    }
}
