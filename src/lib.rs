//! Vacation Ledger
//!
//! This crate records employee vacations, validates bulk imports pasted from
//! spreadsheets, and computes the monthly calendar grid and yearly statistics
//! over the accepted vacations.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod dates;
pub mod error;
pub mod import;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod validation;
