//! Core data models for the vacation ledger.

mod employee;
mod vacation;

pub use employee::{Employee, VacationBalance};
pub use vacation::{UnknownVacationType, Vacation, VacationType};
