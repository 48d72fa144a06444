//! Bulk import of vacations from pasted spreadsheet data.
//!
//! Pasted text is read as a delimited table with a header row and turned
//! into strict [`Vacation`](crate::models::Vacation) records. Rows missing
//! required columns are reported here, before date and overlap validation.

mod columns;
mod table;

pub use columns::Column;
pub use table::{ImportBatch, ImportOptions, detect_delimiter, parse_vacation_table};
