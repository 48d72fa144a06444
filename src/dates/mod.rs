//! Date handling for the vacation ledger.
//!
//! This module provides the textual date parser, inclusive date ranges and
//! the calendar month value used for the month grid.

mod parser;
mod range;
mod year_month;

pub use parser::{DateLayout, parse_date};
pub use range::DateRange;
pub use year_month::YearMonth;
