//! Configuration types for the vacation ledger.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! section is optional and falls back to its default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::import::ImportOptions;
use crate::validation::ValidationOptions;

/// Where the ledger keeps its blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `vacations.json` and `employees.json`.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// The full ledger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Blob storage settings.
    pub storage: StorageConfig,
    /// Batch validation settings.
    pub validation: ValidationOptions,
    /// Import text settings.
    pub import: ImportOptions,
}
