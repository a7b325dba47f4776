//! Property tests over the full valuation pipeline.

use pharmval_common::{LicensingTerms, MechanisticProps, Phase, Role};
use pharmval_engine::{compose, mechanism, phase_table, present_value, royalty};
use pharmval_test_utils::InputsBuilder;
use proptest::prelude::*;

fn mechanistic_props() -> impl Strategy<Value = MechanisticProps> {
    (
        (any::<f64>(), any::<f64>(), any::<f64>(), any::<f64>()),
        (any::<f64>(), any::<f64>(), any::<f64>(), any::<f64>()),
    )
        .prop_map(|((potency, selectivity, half_life, mw), (log_p, f, tv, tn))| {
            MechanisticProps {
                potency_nm: potency,
                selectivity_fold: selectivity,
                half_life_hr: half_life,
                molecular_weight_da: mw,
                log_p,
                bioavailability: f,
                target_validation: tv,
                target_novelty: tn,
            }
        })
}

fn phase() -> impl Strategy<Value = Phase> {
    prop_oneof![
        Just(Phase::Preclinical),
        Just(Phase::PhaseI),
        Just(Phase::PhaseII),
        Just(Phase::PhaseIII),
        Just(Phase::Nda),
        Just(Phase::Approved),
        Just(Phase::Unknown),
    ]
}

proptest! {
    #[test]
    fn mechanism_bonus_is_clamped(props in mechanistic_props()) {
        let bonus = mechanism::score(&props);
        prop_assert!((0.5..=2.0).contains(&bonus), "bonus {} out of range", bonus);
    }

    #[test]
    fn ptrs_bounded_by_twice_baseline(props in mechanistic_props(), phase in phase()) {
        let inputs = InputsBuilder::new().phase(phase).mechanism(props).build();
        let out = compose(&inputs, 2026);
        let baseline = phase_table::lookup(phase).probability;
        prop_assert!(out.ptrs >= 0.0);
        prop_assert!(out.ptrs <= baseline * 2.0);
    }

    #[test]
    fn empty_horizon_has_zero_pv(
        launch in 1950i32..2150,
        shortfall in 0i32..60,
        peak in 0.0f64..1e6,
        rate in -0.5f64..0.5,
        current in 1950i32..2150,
    ) {
        let inputs = InputsBuilder::new()
            .horizon(launch, launch - shortfall)
            .peak_sales(peak)
            .rates(rate, 0.2)
            .royalty(5.0, 12.0, 3)
            .build();
        let out = compose(&inputs, current);
        prop_assert_eq!(out.owner_pv, 0.0);
        prop_assert_eq!(out.licensor_pv, 0.0);
        prop_assert_eq!(out.average_royalty_pct, 0.0);
    }

    #[test]
    fn pv_monotone_in_peak_sales(
        peak in 0.0f64..1e6,
        bump in 0.0f64..1e6,
        launch in 2020i32..2040,
        span in 1i32..25,
        rate in -0.5f64..0.5,
        tax in 0.0f64..1.0,
        cogs in 0.0f64..0.33,
        spend in 0.0f64..0.33,
        wc in 0.0f64..0.33,
    ) {
        let build = |p: f64| InputsBuilder::new()
            .horizon(launch, launch + span)
            .peak_sales(p)
            .rates(rate, tax)
            .costs(cogs, spend, wc)
            .royalty(5.0, 12.0, 3)
            .build();
        let low = build(peak);
        let high = build(peak + bump);
        prop_assert!(present_value(Role::Owner, &high, 2026) >= present_value(Role::Owner, &low, 2026));
        prop_assert!(present_value(Role::Licensor, &high, 2026) >= present_value(Role::Licensor, &low, 2026));
    }

    #[test]
    fn royalty_holds_at_max_after_ramp(
        launch in 2000i32..2100,
        ramp in 0u32..10,
        extra in 1i32..20,
        min in 0.0f64..50.0,
        spread in 0.0f64..50.0,
    ) {
        let terms = LicensingTerms {
            royalty_min_pct: min,
            royalty_max_pct: min + spread,
            royalty_ramp_years: ramp,
        };
        let ramp_end = launch + ramp as i32;
        let loe = ramp_end + extra;
        for year in ramp_end..loe {
            prop_assert_eq!(royalty::royalty_at_year(year, launch, loe, &terms), terms.royalty_max_pct);
        }
    }

    #[test]
    fn compose_is_deterministic(
        props in mechanistic_props(),
        phase in phase(),
        peak in 0.0f64..1e5,
        current in 2000i32..2050,
    ) {
        let inputs = InputsBuilder::new()
            .phase(phase)
            .mechanism(props)
            .peak_sales(peak)
            .royalty(4.0, 9.0, 2)
            .build();
        let a = compose(&inputs, current);
        let b = compose(&inputs, current);
        prop_assert_eq!(a.roi, b.roi);
        prop_assert_eq!(a.rnpv.to_bits(), b.rnpv.to_bits());
        prop_assert_eq!(a.owner_pv.to_bits(), b.owner_pv.to_bits());
        prop_assert_eq!(a.licensor_pv.to_bits(), b.licensor_pv.to_bits());
        prop_assert_eq!(a.ptrs.to_bits(), b.ptrs.to_bits());
    }
}
