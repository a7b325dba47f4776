//! Royalty ramp curve for the licensor stream.

use pharmval_common::LicensingTerms;

/// Royalty percentage (0–100) due in `year`.
///
/// Zero outside `[launch_year, loe_year)`. Ramps linearly from the minimum
/// at launch to the maximum at `launch_year + royalty_ramp_years`, then holds.
/// A zero-year ramp pays the maximum from launch.
pub fn royalty_at_year(year: i32, launch_year: i32, loe_year: i32, terms: &LicensingTerms) -> f64 {
    if year < launch_year || year >= loe_year {
        return 0.0;
    }

    let elapsed = i64::from(year) - i64::from(launch_year);
    let ramp = i64::from(terms.royalty_ramp_years);
    if elapsed >= ramp {
        return terms.royalty_max_pct;
    }

    let progress = elapsed as f64 / ramp as f64;
    terms.royalty_min_pct + (terms.royalty_max_pct - terms.royalty_min_pct) * progress
}

/// Mean royalty over every year in `[launch_year, loe_year)`; zero for an
/// empty horizon.
pub fn average_royalty(launch_year: i32, loe_year: i32, terms: &LicensingTerms) -> f64 {
    if launch_year >= loe_year {
        return 0.0;
    }
    let total: f64 = (launch_year..loe_year)
        .map(|y| royalty_at_year(y, launch_year, loe_year, terms))
        .sum();
    total / (i64::from(loe_year) - i64::from(launch_year)) as f64
}
