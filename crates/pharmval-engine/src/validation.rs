//! Optional validation pass.
//!
//! The compute path absorbs contradictory inputs silently. This pass reports
//! them as warnings for hosts that want guardrails; it never changes what
//! [`crate::compose`] returns.

use pharmval_common::{Phase, Role, ValuationInputs};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValuationWarning {
    /// `loe_year ≤ launch_year`: both PVs are zero.
    EmptyHorizon { launch_year: i32, loe_year: i32 },
    NegativeDiscountRate { rate: f64 },
    /// At or below −100% the discount factor is zero or changes sign.
    DegenerateDiscountRate { rate: f64 },
    FractionOutOfRange { field: &'static str, value: f64 },
    /// Cost fractions exceed sales: owner cash flow is negative.
    NegativeNetMargin { cost_fraction_total: f64 },
    NegativePeakSales { peak_sales: f64 },
    RoyaltyOutOfRange { field: &'static str, value: f64 },
    RoyaltyBoundsInverted { min_pct: f64, max_pct: f64 },
    LicensorWithoutTerms,
    UnknownPhase,
    NonFinite { field: &'static str },
}

impl fmt::Display for ValuationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHorizon { launch_year, loe_year } => write!(
                f,
                "LOE year {loe_year} is not after launch year {launch_year}; commercial value is zero"
            ),
            Self::NegativeDiscountRate { rate } => {
                write!(f, "discount rate {rate} is negative; later cash flows are inflated")
            }
            Self::DegenerateDiscountRate { rate } => {
                write!(f, "discount rate {rate} is at or below -1; discount factors are undefined")
            }
            Self::FractionOutOfRange { field, value } => {
                write!(f, "{field} = {value} is outside [0, 1]")
            }
            Self::NegativeNetMargin { cost_fraction_total } => write!(
                f,
                "cost fractions sum to {cost_fraction_total}; owner net margin is negative"
            ),
            Self::NegativePeakSales { peak_sales } => {
                write!(f, "peak sales {peak_sales} is negative")
            }
            Self::RoyaltyOutOfRange { field, value } => {
                write!(f, "{field} = {value} is outside [0, 100]")
            }
            Self::RoyaltyBoundsInverted { min_pct, max_pct } => write!(
                f,
                "maximum royalty {max_pct}% is below minimum {min_pct}%"
            ),
            Self::LicensorWithoutTerms => {
                write!(f, "licensor role selected but no licensing terms given; rNPV uses zero PV")
            }
            Self::UnknownPhase => {
                write!(f, "unknown clinical phase; probability and cost resolve to zero")
            }
            Self::NonFinite { field } => write!(f, "{field} is not a finite number"),
        }
    }
}

/// Collect every warning for `inputs`, in a stable order. Empty means clean.
pub fn validate(inputs: &ValuationInputs) -> Vec<ValuationWarning> {
    let mut warnings = Vec::new();
    let c = &inputs.commercial;
    let m = &inputs.mechanism;

    let mut numeric: Vec<(&'static str, f64)> = vec![
        ("peak_sales", c.peak_sales),
        ("discount_rate", c.discount_rate),
        ("tax_rate", c.tax_rate),
        ("cogs_fraction", c.cogs_fraction),
        ("commercial_spend_fraction", c.commercial_spend_fraction),
        ("working_capital_fraction", c.working_capital_fraction),
        ("potency_nm", m.potency_nm),
        ("selectivity_fold", m.selectivity_fold),
        ("half_life_hr", m.half_life_hr),
        ("molecular_weight_da", m.molecular_weight_da),
        ("log_p", m.log_p),
        ("bioavailability", m.bioavailability),
        ("target_validation", m.target_validation),
        ("target_novelty", m.target_novelty),
    ];
    if let Some(t) = &inputs.licensing {
        numeric.push(("royalty_min_pct", t.royalty_min_pct));
        numeric.push(("royalty_max_pct", t.royalty_max_pct));
    }
    for (field, value) in numeric {
        if !value.is_finite() {
            warnings.push(ValuationWarning::NonFinite { field });
        }
    }

    if inputs.clinical.phase == Phase::Unknown {
        warnings.push(ValuationWarning::UnknownPhase);
    }

    if c.loe_year <= c.launch_year {
        warnings.push(ValuationWarning::EmptyHorizon {
            launch_year: c.launch_year,
            loe_year: c.loe_year,
        });
    }

    if c.peak_sales < 0.0 {
        warnings.push(ValuationWarning::NegativePeakSales { peak_sales: c.peak_sales });
    }

    if c.discount_rate <= -1.0 {
        warnings.push(ValuationWarning::DegenerateDiscountRate { rate: c.discount_rate });
    } else if c.discount_rate < 0.0 {
        warnings.push(ValuationWarning::NegativeDiscountRate { rate: c.discount_rate });
    }

    let fractions = [
        ("tax_rate", c.tax_rate),
        ("cogs_fraction", c.cogs_fraction),
        ("commercial_spend_fraction", c.commercial_spend_fraction),
        ("working_capital_fraction", c.working_capital_fraction),
        ("bioavailability", m.bioavailability),
        ("target_validation", m.target_validation),
        ("target_novelty", m.target_novelty),
    ];
    for (field, value) in fractions {
        if !(0.0..=1.0).contains(&value) && value.is_finite() {
            warnings.push(ValuationWarning::FractionOutOfRange { field, value });
        }
    }

    let cost_fraction_total = c.cost_fraction_total();
    if cost_fraction_total > 1.0 {
        warnings.push(ValuationWarning::NegativeNetMargin { cost_fraction_total });
    }

    match &inputs.licensing {
        Some(t) => {
            for (field, value) in [
                ("royalty_min_pct", t.royalty_min_pct),
                ("royalty_max_pct", t.royalty_max_pct),
            ] {
                if !(0.0..=100.0).contains(&value) && value.is_finite() {
                    warnings.push(ValuationWarning::RoyaltyOutOfRange { field, value });
                }
            }
            if t.royalty_max_pct < t.royalty_min_pct {
                warnings.push(ValuationWarning::RoyaltyBoundsInverted {
                    min_pct: t.royalty_min_pct,
                    max_pct: t.royalty_max_pct,
                });
            }
        }
        None if inputs.role == Role::Licensor => {
            warnings.push(ValuationWarning::LicensorWithoutTerms);
        }
        None => {}
    }

    warnings
}
