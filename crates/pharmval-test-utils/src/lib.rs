//! Shared fixtures for pharmval tests.

pub use pretty_assertions;

use pharmval_common::{
    LicensingTerms, MechanisticProps, PatentRecord, Phase, Role, TrialMetadata, ValuationInputs,
};

/// Default float tolerance used across the workspace tests.
pub const EPS: f64 = 1e-6;

/// Assert two floats agree within `EPS`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Neutral Preclinical asset: mechanism bonus 1.10 (logP window only).
pub fn neutral_inputs() -> ValuationInputs {
    ValuationInputs::default()
}

/// Builder over `ValuationInputs` for terse test setup.
#[derive(Debug, Clone)]
pub struct InputsBuilder {
    inputs: ValuationInputs,
}

impl InputsBuilder {
    pub fn new() -> Self {
        Self { inputs: neutral_inputs() }
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.inputs.clinical.phase = phase;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.inputs.role = role;
        self
    }

    pub fn peak_sales(mut self, peak: f64) -> Self {
        self.inputs.commercial.peak_sales = peak;
        self
    }

    pub fn horizon(mut self, launch_year: i32, loe_year: i32) -> Self {
        self.inputs.commercial.launch_year = launch_year;
        self.inputs.commercial.loe_year = loe_year;
        self
    }

    pub fn rates(mut self, discount_rate: f64, tax_rate: f64) -> Self {
        self.inputs.commercial.discount_rate = discount_rate;
        self.inputs.commercial.tax_rate = tax_rate;
        self
    }

    pub fn costs(mut self, cogs: f64, commercial_spend: f64, working_capital: f64) -> Self {
        self.inputs.commercial.cogs_fraction = cogs;
        self.inputs.commercial.commercial_spend_fraction = commercial_spend;
        self.inputs.commercial.working_capital_fraction = working_capital;
        self
    }

    pub fn royalty(mut self, min_pct: f64, max_pct: f64, ramp_years: u32) -> Self {
        self.inputs.licensing = Some(LicensingTerms {
            royalty_min_pct: min_pct,
            royalty_max_pct: max_pct,
            royalty_ramp_years: ramp_years,
        });
        self
    }

    pub fn no_licensing(mut self) -> Self {
        self.inputs.licensing = None;
        self
    }

    pub fn mechanism(mut self, props: MechanisticProps) -> Self {
        self.inputs.mechanism = props;
        self
    }

    pub fn build(self) -> ValuationInputs {
        self.inputs
    }
}

impl Default for InputsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero rates and zero cost fractions over a 2030–2040 horizon, so cash
/// flows can be checked by hand.
pub fn frictionless_inputs() -> ValuationInputs {
    InputsBuilder::new()
        .horizon(2030, 2040)
        .rates(0.0, 0.0)
        .costs(0.0, 0.0, 0.0)
        .build()
}

/// Orange Book style records for a single product.
pub fn sample_patent_records() -> Vec<PatentRecord> {
    vec![
        PatentRecord {
            application_number: Some("NDA021588".to_string()),
            product_name: Some("Imatinib".to_string()),
            patent_expiry: Some("2031-05-28".to_string()),
            exclusivity_expiry: None,
        },
        PatentRecord {
            application_number: Some("NDA021588".to_string()),
            product_name: Some("Imatinib".to_string()),
            patent_expiry: Some("2029-01-04".to_string()),
            exclusivity_expiry: Some("2033-07-15".to_string()),
        },
        PatentRecord {
            application_number: Some("NDA021588".to_string()),
            product_name: Some("Imatinib".to_string()),
            patent_expiry: Some("not a date".to_string()),
            exclusivity_expiry: None,
        },
    ]
}

pub fn sample_trial() -> TrialMetadata {
    TrialMetadata {
        nct_id: Some("NCT04956640".to_string()),
        phase: Some("PHASE2".to_string()),
        sponsor: Some("Mirati Therapeutics".to_string()),
        start_date: Some("2021-08-01".to_string()),
    }
}
