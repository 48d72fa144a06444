//! Aggregations over the vacation list.
//!
//! This module contains the calendar grid, which spreads vacations over the
//! days of a month, and the yearly statistics, which tally vacations by type,
//! start month and employee.

mod month_grid;
mod yearly_stats;

pub use month_grid::{EmployeeMonth, MonthGrid, month_grid};
pub use yearly_stats::{YearStats, year_stats};
