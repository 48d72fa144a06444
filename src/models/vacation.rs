//! Vacation record and related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates::{DateRange, parse_date};

/// The classification of a vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VacationType {
    /// Ordinary annual leave.
    Regular,
    /// Sick leave.
    Sick,
    /// Time off in lieu of extra hours worked.
    Compensatory,
    /// Leave to accompany a family member.
    Companion,
}

impl VacationType {
    /// All vacation types in declaration order.
    pub const ALL: [VacationType; 4] = [
        VacationType::Regular,
        VacationType::Sick,
        VacationType::Compensatory,
        VacationType::Companion,
    ];

    /// The canonical name, as stored and displayed.
    pub fn as_str(self) -> &'static str {
        match self {
            VacationType::Regular => "Regular",
            VacationType::Sick => "Sick",
            VacationType::Compensatory => "Compensatory",
            VacationType::Companion => "Companion",
        }
    }
}

impl fmt::Display for VacationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`VacationType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVacationType(pub String);

impl fmt::Display for UnknownVacationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown vacation type '{}'", self.0)
    }
}

impl std::error::Error for UnknownVacationType {}

impl FromStr for VacationType {
    type Err = UnknownVacationType;

    /// Parses a type name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VacationType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVacationType(s.to_string()))
    }
}

/// One employee's leave interval.
///
/// Dates are kept as the text they were imported with; use
/// [`Vacation::interval`] to obtain the parsed range.
///
/// # Example
///
/// ```
/// use vacation_ledger::models::{Vacation, VacationType};
///
/// let vacation = Vacation::new(VacationType::Regular, "E1", "Ana", "5/3/2024", "2024-03-08");
/// let interval = vacation.interval().unwrap();
/// assert_eq!(interval.days().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    /// The vacation classification.
    #[serde(rename = "type")]
    pub vacation_type: VacationType,
    /// Identifier of the employee taking the vacation.
    pub employee_id: String,
    /// Display name of the employee (denormalized copy).
    pub employee_name: String,
    /// First day of the vacation, as text.
    pub start_date: String,
    /// Last day of the vacation (inclusive), as text.
    pub end_date: String,
    /// Optional department display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Vacation {
    /// Creates a vacation without a department.
    pub fn new(
        vacation_type: VacationType,
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            vacation_type,
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            department: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Parses both dates into a range.
    ///
    /// Returns `None` if either date is unparseable. The range may be
    /// inverted; callers decide how to treat that.
    pub fn interval(&self) -> Option<DateRange> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        Some(DateRange::new(start, end))
    }
}
