//! Mechanism bonus: a bounded multiplier on baseline probability derived
//! from eight mechanistic/preclinical properties.

use pharmval_common::MechanisticProps;
use serde::Serialize;

pub const BONUS_FLOOR: f64 = 0.5;
pub const BONUS_CEILING: f64 = 2.0;

/// One threshold adjustment that fired for a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub property: &'static str,
    pub delta: f64,
}

/// Threshold adjustments that fire for `props`, in fixed property order.
/// Each property contributes at most one delta; there are no interaction terms.
pub fn adjustments(props: &MechanisticProps) -> Vec<Adjustment> {
    let mut out = Vec::with_capacity(8);
    let mut push = |property: &'static str, delta: f64| out.push(Adjustment { property, delta });

    // IC50 in nM: lower is more potent
    if props.potency_nm < 10.0 {
        push("potency_nm", 0.10);
    } else if props.potency_nm > 100.0 {
        push("potency_nm", -0.10);
    }

    if props.selectivity_fold < 5.0 {
        push("selectivity_fold", -0.10);
    } else if props.selectivity_fold > 30.0 {
        push("selectivity_fold", 0.10);
    }

    // Both extremes are penalised: too short needs frequent dosing,
    // too long risks accumulation.
    if props.half_life_hr < 2.0 || props.half_life_hr > 24.0 {
        push("half_life_hr", -0.05);
    }

    if props.molecular_weight_da < 200.0 {
        push("molecular_weight_da", 0.05);
    } else if props.molecular_weight_da > 500.0 {
        push("molecular_weight_da", -0.05);
    }

    // logP always contributes; NaN falls outside the window.
    if (1.0..=3.0).contains(&props.log_p) {
        push("log_p", 0.10);
    } else {
        push("log_p", -0.05);
    }

    if props.bioavailability < 0.2 {
        push("bioavailability", -0.10);
    } else if props.bioavailability > 0.5 {
        push("bioavailability", 0.10);
    }

    if props.target_validation < 0.3 {
        push("target_validation", -0.10);
    } else if props.target_validation > 0.7 {
        push("target_validation", 0.20);
    }

    // Novel targets carry more biological risk
    if props.target_novelty < 0.3 {
        push("target_novelty", 0.10);
    } else if props.target_novelty > 0.7 {
        push("target_novelty", -0.10);
    }

    out
}

/// Compute the mechanism bonus, clamped to [`BONUS_FLOOR`, `BONUS_CEILING`].
///
/// Any numeric input is accepted. Since only fixed deltas are summed the
/// result is always finite, even for NaN properties.
pub fn score(props: &MechanisticProps) -> f64 {
    let bonus = 1.0 + adjustments(props).iter().map(|a| a.delta).sum::<f64>();
    bonus.clamp(BONUS_FLOOR, BONUS_CEILING)
}
