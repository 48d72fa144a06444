//! Employee model and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Remaining vacation days per category.
///
/// Stored alongside the employee and kept through persistence, but no
/// computation in the ledger reads it. Values are written as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalance {
    /// Remaining regular vacation days.
    #[serde(with = "rust_decimal::serde::float")]
    pub regular: Decimal,
    /// Remaining sick days.
    #[serde(with = "rust_decimal::serde::float")]
    pub sick: Decimal,
    /// Remaining compensatory days.
    #[serde(with = "rust_decimal::serde::float")]
    pub compensatory: Decimal,
}

/// Represents an employee that vacations are recorded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, referenced by `Vacation::employee_id`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional department display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Optional remaining-day balances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacation_balance: Option<VacationBalance>,
}

impl Employee {
    /// Creates an employee with no department and no balance.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
            vacation_balance: None,
        }
    }
}
