//! Composition of phase probability, mechanism bonus and cash-flow PV into
//! PTRS, rNPV and ROI.
//!
//! ```text
//! ptrs        = P(phase) × bonus
//! dev_cost_pv = cost(phase) × (1 − tax)
//! rnpv        = pv(role) × ptrs − dev_cost_pv
//! roi         = round(rnpv / dev_cost_pv × 100), 0 when dev_cost_pv = 0
//! ```

use pharmval_common::{Role, ValuationInputs, ValuationOutputs};

use crate::cashflow::present_value;
use crate::mechanism;
use crate::phase_table;
use crate::royalty::average_royalty;

/// Compute all outputs for `inputs`, discounting to `current_year`.
///
/// Both owner and licensor PVs are always computed so callers can compare
/// postures; `inputs.role` selects which one feeds rNPV. Never fails.
pub fn compose(inputs: &ValuationInputs, current_year: i32) -> ValuationOutputs {
    let entry = phase_table::lookup(inputs.clinical.phase);
    let baseline_probability = entry.probability;
    let mechanism_bonus = mechanism::score(&inputs.mechanism);
    let ptrs = baseline_probability * mechanism_bonus;
    let dev_cost_pv = entry.dev_cost * (1.0 - inputs.commercial.tax_rate);

    let owner_pv = present_value(Role::Owner, inputs, current_year);
    let licensor_pv = present_value(Role::Licensor, inputs, current_year);
    let selected_pv = match inputs.role {
        Role::Owner => owner_pv,
        Role::Licensor => licensor_pv,
    };

    let rnpv = selected_pv * ptrs - dev_cost_pv;
    let roi = return_on_cost(rnpv, dev_cost_pv);

    let c = &inputs.commercial;
    let average_royalty_pct = inputs
        .licensing
        .as_ref()
        .map(|t| average_royalty(c.launch_year, c.loe_year, t))
        .unwrap_or(0.0);

    ValuationOutputs {
        mechanism_bonus,
        baseline_probability,
        ptrs,
        dev_cost_pv,
        owner_pv,
        licensor_pv,
        rnpv,
        roi,
        average_royalty_pct,
    }
}

/// Rounded percentage return. Halves round toward +inf (-12.5 gives -12),
/// not away from zero as `f64::round` would. `as` saturates on overflow
/// and maps NaN to 0.
fn return_on_cost(rnpv: f64, dev_cost_pv: f64) -> i64 {
    if dev_cost_pv == 0.0 {
        return 0;
    }
    (rnpv / dev_cost_pv * 100.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmval_common::{MechanisticProps, Phase};
    use pharmval_test_utils::{assert_close, frictionless_inputs, neutral_inputs, InputsBuilder};

    #[test]
    fn test_preclinical_neutral_profile() {
        let out = compose(&neutral_inputs(), 2026);
        assert_close(out.baseline_probability, 0.12);
        // logP 2.0 sits in the optimal window: +0.10
        assert_close(out.mechanism_bonus, 1.10);
        assert_close(out.ptrs, 0.132);
    }

    #[test]
    fn test_unit_bonus_gives_baseline_ptrs() {
        // logP window (+0.10) offset by poor bioavailability (−0.10)
        let props = MechanisticProps { bioavailability: 0.1, ..Default::default() };
        let out = compose(&InputsBuilder::new().mechanism(props).build(), 2026);
        assert_close(out.mechanism_bonus, 1.0);
        assert_close(out.ptrs, 0.12);
    }

    #[test]
    fn test_rnpv_owner() {
        let inputs = InputsBuilder::new()
            .phase(Phase::PhaseIII)
            .horizon(2030, 2040)
            .rates(0.0, 0.0)
            .costs(0.0, 0.0, 0.0)
            .build();
        let out = compose(&inputs, 2030);
        assert_close(out.owner_pv, 7500.0);
        assert_close(out.dev_cost_pv, 60.0);
        assert_close(out.rnpv, 7500.0 * 0.60 * 1.10 - 60.0);
        // 4890 / 60 = 81.5×
        assert_eq!(out.roi, 8150);
    }

    #[test]
    fn test_roi_halves_round_up() {
        // 7.5 / 60 is exactly 0.125
        assert_eq!(return_on_cost(-7.5, 60.0), -12);
        assert_eq!(return_on_cost(7.5, 60.0), 13);
        assert_eq!(return_on_cost(-7.6, 60.0), -13);
        assert_eq!(return_on_cost(f64::NAN, 60.0), 0);
    }

    #[test]
    fn test_role_selects_stream() {
        let owner = InputsBuilder::new().role(Role::Owner).royalty(5.0, 12.0, 3).build();
        let licensor = InputsBuilder::new().role(Role::Licensor).royalty(5.0, 12.0, 3).build();
        let a = compose(&owner, 2026);
        let b = compose(&licensor, 2026);

        assert_eq!(a.owner_pv, b.owner_pv);
        assert_eq!(a.licensor_pv, b.licensor_pv);
        assert_close(a.rnpv, a.owner_pv * a.ptrs - a.dev_cost_pv);
        assert_close(b.rnpv, b.licensor_pv * b.ptrs - b.dev_cost_pv);
    }

    #[test]
    fn test_dev_cost_after_tax() {
        let inputs = InputsBuilder::new().phase(Phase::PhaseII).rates(0.1, 0.25).build();
        assert_close(compose(&inputs, 2026).dev_cost_pv, 75.0);
    }

    #[test]
    fn test_zero_dev_cost_guards_roi() {
        let inputs = InputsBuilder::new().phase(Phase::Approved).build();
        let out = compose(&inputs, 2026);
        assert_eq!(out.dev_cost_pv, 0.0);
        assert_eq!(out.roi, 0);
    }

    #[test]
    fn test_unknown_phase_zeroes_probability_and_cost() {
        let inputs = InputsBuilder::new().phase(Phase::Unknown).build();
        let out = compose(&inputs, 2026);
        assert_eq!(out.baseline_probability, 0.0);
        assert_eq!(out.ptrs, 0.0);
        assert_eq!(out.dev_cost_pv, 0.0);
        assert_eq!(out.rnpv, 0.0);
        assert_eq!(out.roi, 0);
    }

    #[test]
    fn test_average_royalty_reported() {
        let inputs = InputsBuilder::new().horizon(2030, 2034).royalty(5.0, 12.0, 3).build();
        assert_close(compose(&inputs, 2026).average_royalty_pct, 8.5);

        let inputs = InputsBuilder::new().no_licensing().build();
        assert_eq!(compose(&inputs, 2026).average_royalty_pct, 0.0);
    }

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let inputs = frictionless_inputs();
        assert_eq!(compose(&inputs, 2028), compose(&inputs, 2028));
    }

    #[test]
    fn test_negative_rnpv_gives_negative_roi() {
        let inputs = InputsBuilder::new().horizon(2030, 2030).build();
        let out = compose(&inputs, 2026);
        // No revenue: rnpv is the full after-tax cost, ROI −100%
        assert_close(out.rnpv, -out.dev_cost_pv);
        assert_eq!(out.roi, -100);
    }
}
