//! Headcount Scenario Engine
//!
//! This crate loads an employee roster, selects the highest-compensated
//! employees for a target headcount, and reports the total, average and
//! median cost of that selection through an HTML page, a JSON endpoint and
//! a CSV download.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
pub mod selection;
