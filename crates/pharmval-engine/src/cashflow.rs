//! Discounted cash-flow integration for the owner and licensor streams.
//!
//! For each year `y` in `[launch_year, loe_year)`:
//!
//! ```text
//! sales(y)    = peak_sales × min((y − launch_year) / SALES_RAMP_YEARS, 1)
//! owner(y)    = sales(y) × (1 − cogs − commercial_spend − working_capital) × (1 − tax)
//! licensor(y) = sales(y) × royalty(y) / 100 × (1 − tax)
//! pv          = Σ flow(y) / (1 + discount_rate)^(y − current_year)
//! ```

use pharmval_common::{Role, ValuationInputs};
use serde::Serialize;

use crate::royalty::royalty_at_year;

/// Years from launch until sales reach peak. Not user-configurable.
pub const SALES_RAMP_YEARS: i32 = 4;

/// Sales in `year`, zero outside the commercial horizon.
pub fn sales_at_year(year: i32, launch_year: i32, loe_year: i32, peak_sales: f64) -> f64 {
    if year < launch_year || year >= loe_year {
        return 0.0;
    }
    let elapsed = i64::from(year) - i64::from(launch_year);
    if elapsed >= i64::from(SALES_RAMP_YEARS) {
        return peak_sales;
    }
    peak_sales * elapsed as f64 / f64::from(SALES_RAMP_YEARS)
}

/// `(1 + rate)^(year − current_year)`. Negative rates are accepted.
pub fn discount_factor(discount_rate: f64, year: i32, current_year: i32) -> f64 {
    let exponent = i64::from(year) - i64::from(current_year);
    // powi takes i32; horizons beyond that range have already underflowed to 0 or inf.
    let exponent = exponent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (1.0 + discount_rate).powi(exponent)
}

fn owner_flow(inputs: &ValuationInputs, sales: f64) -> f64 {
    let c = &inputs.commercial;
    sales * (1.0 - c.cost_fraction_total()) * (1.0 - c.tax_rate)
}

/// Licensor flow is royalty on top-line sales, net only of tax.
fn licensor_flow(inputs: &ValuationInputs, sales: f64, royalty_pct: f64) -> f64 {
    sales * (royalty_pct / 100.0) * (1.0 - inputs.commercial.tax_rate)
}

fn royalty_pct(inputs: &ValuationInputs, year: i32) -> f64 {
    let c = &inputs.commercial;
    inputs
        .licensing
        .as_ref()
        .map(|t| royalty_at_year(year, c.launch_year, c.loe_year, t))
        .unwrap_or(0.0)
}

/// Present value of the cash-flow stream accruing to `role`.
///
/// Zero for an empty horizon, and zero for the licensor when no licensing
/// terms are supplied.
pub fn present_value(role: Role, inputs: &ValuationInputs, current_year: i32) -> f64 {
    let c = &inputs.commercial;
    if role == Role::Licensor && inputs.licensing.is_none() {
        return 0.0;
    }

    (c.launch_year..c.loe_year)
        .map(|year| {
            let sales = sales_at_year(year, c.launch_year, c.loe_year, c.peak_sales);
            let flow = match role {
                Role::Owner => owner_flow(inputs, sales),
                Role::Licensor => licensor_flow(inputs, sales, royalty_pct(inputs, year)),
            };
            flow / discount_factor(c.discount_rate, year, current_year)
        })
        .sum()
}

/// One row of the per-year cash-flow schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCashflow {
    pub year: i32,
    pub sales: f64,
    pub royalty_pct: f64,
    pub discount_factor: f64,
    pub owner_cashflow: f64,
    pub licensor_cashflow: f64,
    pub owner_pv: f64,
    pub licensor_pv: f64,
}

/// Year-by-year breakdown behind [`present_value`]. Summing `owner_pv` or
/// `licensor_pv` in order reproduces the corresponding present value.
pub fn cashflow_schedule(inputs: &ValuationInputs, current_year: i32) -> Vec<YearCashflow> {
    let c = &inputs.commercial;

    (c.launch_year..c.loe_year)
        .map(|year| {
            let sales = sales_at_year(year, c.launch_year, c.loe_year, c.peak_sales);
            let royalty_pct = royalty_pct(inputs, year);
            let factor = discount_factor(c.discount_rate, year, current_year);
            let owner_cashflow = owner_flow(inputs, sales);
            let licensor_cashflow = if inputs.licensing.is_some() {
                licensor_flow(inputs, sales, royalty_pct)
            } else {
                0.0
            };

            YearCashflow {
                year,
                sales,
                royalty_pct,
                discount_factor: factor,
                owner_cashflow,
                licensor_cashflow,
                owner_pv: owner_cashflow / factor,
                licensor_pv: licensor_cashflow / factor,
            }
        })
        .collect()
}
