//! Request types for the report service.
//!
//! Every endpoint takes the same single control: the target headcount.

use serde::{Deserialize, Serialize};

/// Query string accepted by `/`, `/api/scenario` and `/export`.
///
/// `headcount` is signed so negative values can be clamped to zero
/// rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioQuery {
    /// Requested number of employees to select.
    #[serde(default)]
    pub headcount: Option<i64>,
}
