//! Configuration loading for the vacation ledger.
//!
//! The configuration names the data directory for blob storage and the
//! import and validation options.
//!
//! # Example
//!
//! ```no_run
//! use vacation_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ledger.yaml").unwrap();
//! println!("Data directory: {}", config.config().storage.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LedgerConfig, StorageConfig};
