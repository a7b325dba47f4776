//! Hand-checked valuation scenarios.

use pharmval_common::{LicensingTerms, Phase, Role};
use pharmval_engine::{compose, present_value, royalty};
use pharmval_test_utils::{assert_close, InputsBuilder};

#[test]
fn launch_year_only_horizon_has_no_owner_value() {
    // Year 0 of the 4-year sales ramp sells nothing.
    let inputs = InputsBuilder::new()
        .horizon(2030, 2031)
        .peak_sales(500.0)
        .rates(0.0, 0.0)
        .costs(0.0, 0.0, 0.0)
        .build();
    let out = compose(&inputs, 2030);
    assert_eq!(out.owner_pv, 0.0);
    assert_eq!(present_value(Role::Owner, &inputs, 2030), 0.0);
}

#[test]
fn royalty_one_year_into_three_year_ramp() {
    let terms = LicensingTerms {
        royalty_min_pct: 5.0,
        royalty_max_pct: 12.0,
        royalty_ramp_years: 3,
    };
    let pct = royalty::royalty_at_year(2031, 2030, 2045, &terms);
    assert_close(pct, 5.0 + (12.0 - 5.0) / 3.0);
    assert!((pct - 7.33).abs() < 0.01);
}

#[test]
fn approved_asset_reports_zero_roi() {
    let inputs = InputsBuilder::new().phase(Phase::Approved).build();
    let out = compose(&inputs, 2026);
    assert_eq!(out.dev_cost_pv, 0.0);
    assert_eq!(out.roi, 0);
    assert!(out.rnpv > 0.0);
}

#[test]
fn full_tax_zeroes_cost_and_roi() {
    let inputs = InputsBuilder::new().phase(Phase::PhaseII).rates(0.1, 1.0).build();
    let out = compose(&inputs, 2026);
    assert_eq!(out.dev_cost_pv, 0.0);
    assert_eq!(out.roi, 0);
}

#[test]
fn licensor_deal_end_to_end() {
    let inputs = InputsBuilder::new()
        .phase(Phase::PhaseII)
        .role(Role::Licensor)
        .horizon(2030, 2035)
        .peak_sales(1000.0)
        .rates(0.0, 0.0)
        .royalty(10.0, 10.0, 0)
        .build();
    let out = compose(&inputs, 2030);
    // sales 0, 250, 500, 750, 1000 at 10%
    assert_close(out.licensor_pv, 250.0);
    assert_close(out.average_royalty_pct, 10.0);
    assert_close(out.rnpv, 250.0 * out.ptrs - 100.0);
}
