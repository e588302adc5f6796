//! Selection and aggregation for the Headcount Scenario Engine.
//!
//! Given a roster and a target headcount, this module picks the
//! highest-compensated employees and computes the total, average and median
//! cost of that selection. Everything here is a pure function of its inputs.

mod engine;
mod statistics;

pub use engine::{clamp_headcount, default_headcount, prioritize, select};
pub use statistics::median_comp;
