//! Valuation outputs. Always recomputable from the inputs; never the
//! source of truth.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationOutputs {
    /// Multiplier on baseline probability, clamped to [0.5, 2.0].
    pub mechanism_bonus: f64,
    pub baseline_probability: f64,
    /// Probability of technical and regulatory success.
    pub ptrs: f64,
    /// After-tax development cost.
    pub dev_cost_pv: f64,
    pub owner_pv: f64,
    pub licensor_pv: f64,
    pub rnpv: f64,
    /// Percentage return on development cost; zero when the cost is zero.
    pub roi: i64,
    pub average_royalty_pct: f64,
}
