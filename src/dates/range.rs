//! Inclusive calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days, `[start, end]`.
///
/// A range whose start lies after its end is "inverted": it covers no days
/// but still takes part in overlap checks using its raw bounds.
///
/// # Example
///
/// ```
/// use vacation_ledger::dates::DateRange;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let existing = DateRange::new(d(10), d(15));
/// let candidate = DateRange::new(d(14), d(20));
/// assert!(candidate.overlaps(&existing));
/// assert_eq!(existing.days().count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range.
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from its bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the start lies after the end.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the two inclusive ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Returns true if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The days shared with `other`, inverted when there are none.
    pub fn intersection(&self, other: &DateRange) -> DateRange {
        DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Iterates every calendar day of the range in order.
    ///
    /// An inverted range yields nothing.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start
            .iter_days()
            .take_while(move |day| *day <= self.end)
    }
}
