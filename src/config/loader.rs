//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};

use super::types::LedgerConfig;

/// Loads and provides access to the ledger configuration.
///
/// # File Format
///
/// ```yaml
/// storage:
///   data_dir: ./data        # where vacations.json and employees.json live
/// validation:
///   check_within_batch: false
/// import:
///   delimiter: null         # detected from the header line when null
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ledger.yaml")?;
/// println!("Data directory: {}", loader.config().storage.data_dir.display());
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for [`LedgerConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content).map_err(|e| match e {
            LedgerError::ConfigParseError { message, .. } => LedgerError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(
            path = %path_str,
            data_dir = %loader.config.storage.data_dir.display(),
            "Loaded configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn parse(content: &str) -> LedgerResult<Self> {
        let config = if content.trim().is_empty() {
            LedgerConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| LedgerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> LedgerConfig {
        self.config
    }
}
