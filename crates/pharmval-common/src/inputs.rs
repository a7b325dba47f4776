//! Valuation inputs.
//!
//! An input set is constructed by the caller (a form, an API payload, a
//! loaded file) and handed to the engine whole. Every section carries serde
//! defaults so partial YAML/JSON documents load cleanly.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::phase::Phase;

/// Commercial posture that selects which PV stream feeds rNPV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Asset owner, keeps the net operating margin.
    #[default]
    Owner,
    /// Licensor, receives a royalty on top-line sales.
    Licensor,
}

/// Complete input set for a single valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    #[serde(default)]
    pub clinical: ClinicalProfile,

    #[serde(default)]
    pub commercial: CommercialAssumptions,

    /// Royalty schedule. Absent means the licensor stream is zero.
    #[serde(default)]
    pub licensing: Option<LicensingTerms>,

    #[serde(default)]
    pub mechanism: MechanisticProps,

    #[serde(default)]
    pub role: Role,
}

impl Default for ValuationInputs {
    fn default() -> Self {
        Self {
            clinical: ClinicalProfile::default(),
            commercial: CommercialAssumptions::default(),
            licensing: Some(LicensingTerms::default()),
            mechanism: MechanisticProps::default(),
            role: Role::Owner,
        }
    }
}

// ── Clinical ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    #[serde(default)]
    pub phase: Phase,

    /// Free-form label, never used in computation.
    #[serde(default)]
    pub indication: String,
}

impl Default for ClinicalProfile {
    fn default() -> Self {
        Self {
            phase: Phase::Preclinical,
            indication: String::new(),
        }
    }
}

// ── Commercial ────────────────────────────────────────────────────────────────

/// Commercial assumptions. Money is in currency units per year
/// (typically millions); fractions are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialAssumptions {
    pub peak_sales: f64,
    pub launch_year: i32,
    /// Loss-of-exclusivity year; cash flow stops at the start of this year.
    pub loe_year: i32,
    pub discount_rate: f64,
    pub tax_rate: f64,
    pub cogs_fraction: f64,
    pub commercial_spend_fraction: f64,
    pub working_capital_fraction: f64,
}

impl Default for CommercialAssumptions {
    fn default() -> Self {
        Self {
            peak_sales: 1000.0,
            launch_year: 2030,
            loe_year: 2042,
            discount_rate: 0.10,
            tax_rate: 0.21,
            cogs_fraction: 0.15,
            commercial_spend_fraction: 0.25,
            working_capital_fraction: 0.05,
        }
    }
}

impl CommercialAssumptions {
    /// Sum of the three cost fractions deducted from owner sales.
    pub fn cost_fraction_total(&self) -> f64 {
        self.cogs_fraction + self.commercial_spend_fraction + self.working_capital_fraction
    }
}

// ── Licensing ─────────────────────────────────────────────────────────────────

/// Royalty schedule ramping from `royalty_min_pct` to `royalty_max_pct`
/// over `royalty_ramp_years` after launch. Percentages are 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingTerms {
    pub royalty_min_pct: f64,
    pub royalty_max_pct: f64,
    pub royalty_ramp_years: u32,
}

impl Default for LicensingTerms {
    fn default() -> Self {
        Self {
            royalty_min_pct: 5.0,
            royalty_max_pct: 12.0,
            royalty_ramp_years: 3,
        }
    }
}

// ── Mechanistic ───────────────────────────────────────────────────────────────

/// Mechanistic and preclinical properties feeding the mechanism bonus.
/// Defaults are the neutral profile; logP 2.0 sits in the optimal window,
/// so the bonus is 1.10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanisticProps {
    pub potency_nm: f64,
    pub selectivity_fold: f64,
    pub half_life_hr: f64,
    pub molecular_weight_da: f64,
    pub log_p: f64,
    pub bioavailability: f64,
    pub target_validation: f64,
    pub target_novelty: f64,
}

impl Default for MechanisticProps {
    fn default() -> Self {
        Self {
            potency_nm: 50.0,
            selectivity_fold: 10.0,
            half_life_hr: 12.0,
            molecular_weight_da: 400.0,
            log_p: 2.0,
            bioavailability: 0.5,
            target_validation: 0.5,
            target_novelty: 0.5,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl ValuationInputs {
    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load by extension: `.json` is JSON, anything else is read as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(path),
            _ => Self::from_yaml(path),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}
