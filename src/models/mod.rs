//! Core data models for the Headcount Scenario Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod scenario;

pub use employee::{EmployeeRecord, Roster, EMPLOYEE_ID_PREFIX};
pub use scenario::{ScenarioSummary, Selection};
