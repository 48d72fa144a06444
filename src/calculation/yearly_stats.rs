//! Yearly vacation statistics.
//!
//! Vacations are attributed entirely to the month and year of their start
//! date, even when they run into later months. The calendar grid, by
//! contrast, spreads each vacation over every day it covers.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::models::{Vacation, VacationType};

/// Vacation tallies for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStats {
    /// The year the statistics cover.
    pub year: i32,
    /// Number of vacations starting in the year.
    pub total: usize,
    /// Counts per vacation type. Types with no vacation are absent.
    pub by_type: BTreeMap<VacationType, usize>,
    /// Counts per start month, index 0 being January.
    pub by_month: [usize; 12],
    /// Counts per employee identifier.
    pub by_employee: BTreeMap<String, usize>,
}

impl YearStats {
    /// Average number of vacations per calendar month, rounded half away from
    /// zero to one decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_ledger::calculation::year_stats;
    /// use vacation_ledger::models::{Vacation, VacationType};
    /// use rust_decimal::Decimal;
    ///
    /// let vacations = vec![
    ///     Vacation::new(VacationType::Sick, "E1", "Ana", "2024-01-02", "2024-01-02"),
    ///     Vacation::new(VacationType::Sick, "E1", "Ana", "2024-06-02", "2024-06-02"),
    /// ];
    /// let stats = year_stats(&vacations, 2024);
    /// assert_eq!(stats.monthly_average(), Decimal::new(2, 1));
    /// ```
    pub fn monthly_average(&self) -> Decimal {
        (Decimal::from(self.total) / Decimal::from(12))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Count for one vacation type, zero when absent.
    pub fn count_for_type(&self, vacation_type: VacationType) -> usize {
        self.by_type.get(&vacation_type).copied().unwrap_or(0)
    }

    /// Count for one employee, zero when absent.
    pub fn count_for_employee(&self, employee_id: &str) -> usize {
        self.by_employee.get(employee_id).copied().unwrap_or(0)
    }
}

/// Computes the statistics for `year`.
///
/// A vacation counts iff its start date parses and falls in `year`; its end
/// date is never consulted. Every count is a simple tally, not weighted by
/// duration.
///
/// # Example
///
/// ```
/// use vacation_ledger::calculation::year_stats;
/// use vacation_ledger::models::{Vacation, VacationType};
///
/// let vacations = vec![Vacation::new(VacationType::Regular, "E1", "Ana", "2024-03-05", "2024-04-10")];
/// let stats = year_stats(&vacations, 2024);
///
/// assert_eq!(stats.total, 1);
/// assert_eq!(stats.by_month[2], 1);
/// assert_eq!(stats.by_month[3], 0);
/// ```
pub fn year_stats(vacations: &[Vacation], year: i32) -> YearStats {
    let mut stats = YearStats {
        year,
        total: 0,
        by_type: BTreeMap::new(),
        by_month: [0; 12],
        by_employee: BTreeMap::new(),
    };

    for vacation in vacations {
        let Some(start) = parse_date(&vacation.start_date) else {
            continue;
        };
        if start.year() != year {
            continue;
        }

        stats.total += 1;
        *stats.by_type.entry(vacation.vacation_type).or_insert(0) += 1;
        stats.by_month[start.month0() as usize] += 1;
        *stats
            .by_employee
            .entry(vacation.employee_id.clone())
            .or_insert(0) += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacation(vacation_type: VacationType, employee_id: &str, start: &str, end: &str) -> Vacation {
        Vacation::new(vacation_type, employee_id, "Test Employee", start, end)
    }

    #[test]
    fn test_multi_month_vacation_counted_once_in_start_month() {
        let vacations = vec![vacation(VacationType::Regular, "E1", "2024-03-05", "2024-04-10")];
        let stats = year_stats(&vacations, 2024);

        assert_eq!(stats.total, 1);
        assert_eq!(stats.by_month, [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_vacation_spanning_new_year_belongs_to_start_year() {
        let vacations = vec![vacation(VacationType::Regular, "E1", "2023-12-28", "2024-01-03")];

        assert_eq!(year_stats(&vacations, 2023).total, 1);
        assert_eq!(year_stats(&vacations, 2023).by_month[11], 1);
        assert_eq!(year_stats(&vacations, 2024).total, 0);
    }

    #[test]
    fn test_unparseable_start_excluded_from_total() {
        let vacations = vec![
            vacation(VacationType::Sick, "E1", "31/2/2024", "2024-03-01"),
            vacation(VacationType::Sick, "E1", "2024-03-01", "2024-03-01"),
        ];
        let stats = year_stats(&vacations, 2024);

        assert_eq!(stats.total, 1);
        assert_eq!(stats.count_for_type(VacationType::Sick), 1);
    }

    #[test]
    fn test_unparseable_end_still_counted() {
        let vacations = vec![vacation(VacationType::Sick, "E1", "2024-03-01", "whenever")];
        assert_eq!(year_stats(&vacations, 2024).total, 1);
    }

    #[test]
    fn test_counts_by_type_and_employee() {
        let vacations = vec![
            vacation(VacationType::Regular, "E1", "2024-01-10", "2024-01-12"),
            vacation(VacationType::Regular, "E2", "15/2/2024", "16/2/2024"),
            vacation(VacationType::Companion, "E1", "01-05-2024", "02-05-2024"),
            vacation(VacationType::Compensatory, "E3", "2025-01-01", "2025-01-01"),
        ];
        let stats = year_stats(&vacations, 2024);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_for_type(VacationType::Regular), 2);
        assert_eq!(stats.count_for_type(VacationType::Companion), 1);
        assert_eq!(stats.count_for_type(VacationType::Compensatory), 0);
        assert!(!stats.by_type.contains_key(&VacationType::Sick));
        assert_eq!(stats.count_for_employee("E1"), 2);
        assert_eq!(stats.count_for_employee("E2"), 1);
        assert_eq!(stats.count_for_employee("E3"), 0);
        assert_eq!(stats.by_month[0], 1);
        assert_eq!(stats.by_month[1], 1);
        assert_eq!(stats.by_month[4], 1);
    }

    #[test]
    fn test_counts_are_not_weighted_by_duration() {
        let vacations = vec![vacation(VacationType::Regular, "E1", "2024-06-01", "2024-06-30")];
        let stats = year_stats(&vacations, 2024);

        assert_eq!(stats.count_for_employee("E1"), 1);
    }

    #[test]
    fn test_empty_year() {
        let stats = year_stats(&[], 2024);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.monthly_average(), Decimal::ZERO);
        assert!(stats.by_type.is_empty());
    }

    #[test]
    fn test_monthly_average_rounds_to_one_decimal() {
        let vacations: Vec<Vacation> = (1..=7)
            .map(|day| vacation(VacationType::Regular, "E1", &format!("{}/1/2024", day), "2024-02-01"))
            .collect();
        let stats = year_stats(&vacations, 2024);

        // 7 / 12 = 0.5833...
        assert_eq!(stats.monthly_average(), Decimal::new(6, 1));
    }

    #[test]
    fn test_monthly_average_rounds_half_up() {
        let vacations: Vec<Vacation> = (1..=3)
            .map(|day| vacation(VacationType::Sick, "E1", &format!("{}/5/2024", day), "2024-06-01"))
            .collect();

        // 3 / 12 = 0.25
        assert_eq!(year_stats(&vacations, 2024).monthly_average(), Decimal::new(3, 1));
    }
}
