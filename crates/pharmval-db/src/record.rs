//! Persisted valuation snapshot.

use chrono::{DateTime, Utc};
use pharmval_common::{PharmvalError, Result, ValuationInputs, ValuationOutputs};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of generated share identifiers.
pub const SHARE_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub id: Uuid,
    /// Opaque identifier safe to hand out in links.
    pub share_id: String,
    pub created_at: DateTime<Utc>,
    pub inputs: ValuationInputs,
    pub outputs: ValuationOutputs,
}

impl ValuationRecord {
    /// Wrap a computed valuation with fresh identifiers.
    pub fn new(inputs: ValuationInputs, outputs: ValuationOutputs) -> Self {
        Self {
            id: Uuid::new_v4(),
            share_id: generate_share_id(),
            created_at: Utc::now(),
            inputs,
            outputs,
        }
    }
}

/// Reject snapshots carrying NaN or infinite numbers. JSON has no
/// encoding for them, so such a record would be written but never read back.
pub fn ensure_storable(inputs: &ValuationInputs, outputs: &ValuationOutputs) -> Result<()> {
    let c = &inputs.commercial;
    let m = &inputs.mechanism;
    let mut fields = vec![
        ("commercial.peak_sales", c.peak_sales),
        ("commercial.discount_rate", c.discount_rate),
        ("commercial.tax_rate", c.tax_rate),
        ("commercial.cogs_fraction", c.cogs_fraction),
        ("commercial.commercial_spend_fraction", c.commercial_spend_fraction),
        ("commercial.working_capital_fraction", c.working_capital_fraction),
        ("mechanism.potency_nm", m.potency_nm),
        ("mechanism.selectivity_fold", m.selectivity_fold),
        ("mechanism.half_life_hr", m.half_life_hr),
        ("mechanism.molecular_weight_da", m.molecular_weight_da),
        ("mechanism.log_p", m.log_p),
        ("mechanism.bioavailability", m.bioavailability),
        ("mechanism.target_validation", m.target_validation),
        ("mechanism.target_novelty", m.target_novelty),
        ("outputs.mechanism_bonus", outputs.mechanism_bonus),
        ("outputs.baseline_probability", outputs.baseline_probability),
        ("outputs.ptrs", outputs.ptrs),
        ("outputs.dev_cost_pv", outputs.dev_cost_pv),
        ("outputs.owner_pv", outputs.owner_pv),
        ("outputs.licensor_pv", outputs.licensor_pv),
        ("outputs.rnpv", outputs.rnpv),
        ("outputs.average_royalty_pct", outputs.average_royalty_pct),
    ];
    if let Some(t) = &inputs.licensing {
        fields.push(("licensing.royalty_min_pct", t.royalty_min_pct));
        fields.push(("licensing.royalty_max_pct", t.royalty_max_pct));
    }

    let bad: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| !v.is_finite())
        .map(|(name, _)| *name)
        .collect();
    if bad.is_empty() {
        Ok(())
    } else {
        Err(PharmvalError::Validation(format!(
            "cannot store non-finite values: {}",
            bad.join(", ")
        )))
    }
}

/// Random lowercase hex identifier, independent of the primary id.
pub fn generate_share_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHARE_ID_LEN);
    id
}
