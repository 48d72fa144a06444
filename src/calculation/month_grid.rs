//! Monthly calendar grid aggregation.
//!
//! This module computes, per employee, which days of a given month are
//! covered by at least one of their vacations. Vacations that cross a month
//! boundary contribute only the days that land in the requested month.

use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::{DateRange, YearMonth};
use crate::models::Vacation;

/// One employee's row in a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonth {
    /// The employee identifier.
    pub employee_id: String,
    /// The display name, taken from the employee's first vacation in the input.
    pub name: String,
    /// Covered day-of-month numbers (1-based), without duplicates.
    pub days: BTreeSet<u32>,
}

impl EmployeeMonth {
    /// Returns true if `day` is covered.
    pub fn is_on_vacation(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    /// Number of covered days, shown as the row total.
    pub fn total(&self) -> usize {
        self.days.len()
    }
}

/// Per-employee vacation days for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// The month the grid covers.
    pub month: YearMonth,
    rows: Vec<EmployeeMonth>,
}

impl MonthGrid {
    /// Rows in order of each employee's first vacation in the input.
    pub fn rows(&self) -> &[EmployeeMonth] {
        &self.rows
    }

    /// Looks up an employee's row.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeMonth> {
        self.rows.iter().find(|row| row.employee_id == employee_id)
    }

    /// Number of day columns the grid has.
    pub fn days_in_month(&self) -> u32 {
        self.month.days_in_month()
    }

    /// Returns true when nobody is on vacation during the month.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the calendar grid for `month`.
///
/// Vacations with unparseable dates are skipped. Each remaining vacation
/// with at least one day in the month adds those days to its employee's
/// set; overlapping vacations of one employee do not double count.
///
/// # Example
///
/// ```
/// use vacation_ledger::calculation::month_grid;
/// use vacation_ledger::dates::YearMonth;
/// use vacation_ledger::models::{Vacation, VacationType};
///
/// let vacations = vec![Vacation::new(VacationType::Regular, "E2", "Bea", "2024-03-30", "2024-04-02")];
/// let grid = month_grid(&vacations, YearMonth::new(2024, 3)?);
///
/// let row = grid.get("E2").unwrap();
/// assert_eq!(row.days.iter().copied().collect::<Vec<_>>(), vec![30, 31]);
/// assert_eq!(row.total(), 2);
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
pub fn month_grid(vacations: &[Vacation], month: YearMonth) -> MonthGrid {
    let mut rows: Vec<EmployeeMonth> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let bounds = DateRange::new(month.first_day(), month.last_day());

    for vacation in vacations {
        let Some(range) = vacation.interval() else {
            continue;
        };

        let within = range.intersection(&bounds);
        let days: Vec<u32> = within.days().map(|day| day.day()).collect();
        if days.is_empty() {
            continue;
        }

        let position = *index
            .entry(vacation.employee_id.as_str())
            .or_insert_with(|| {
                rows.push(EmployeeMonth {
                    employee_id: vacation.employee_id.clone(),
                    name: vacation.employee_name.clone(),
                    days: BTreeSet::new(),
                });
                rows.len() - 1
            });
        rows[position].days.extend(days);
    }

    debug!(month = %month, employees = rows.len(), "Built month grid");

    MonthGrid { month, rows }
}
