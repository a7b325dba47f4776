//! Flat CSV export of valuation snapshots.

use std::io::Write;

use pharmval_common::{Result, ValuationInputs, ValuationOutputs};

use crate::record::ValuationRecord;

/// Column order for [`export_row`].
pub const EXPORT_HEADERS: [&str; 32] = [
    "phase",
    "indication",
    "role",
    "peak_sales",
    "launch_year",
    "loe_year",
    "discount_rate",
    "tax_rate",
    "cogs_fraction",
    "commercial_spend_fraction",
    "working_capital_fraction",
    "royalty_min_pct",
    "royalty_max_pct",
    "royalty_ramp_years",
    "potency_nm",
    "selectivity_fold",
    "half_life_hr",
    "molecular_weight_da",
    "log_p",
    "bioavailability",
    "target_validation",
    "target_novelty",
    "mechanism_bonus",
    "baseline_probability",
    "ptrs",
    "dev_cost_pv",
    "owner_pv",
    "licensor_pv",
    "rnpv",
    "roi",
    "average_royalty_pct",
    "licensed",
];

/// Flatten an inputs/outputs pair into one row matching [`EXPORT_HEADERS`].
/// Licensing columns are empty when no terms were given.
pub fn export_row(inputs: &ValuationInputs, outputs: &ValuationOutputs) -> Vec<String> {
    let c = &inputs.commercial;
    let m = &inputs.mechanism;
    let (min, max, ramp) = match &inputs.licensing {
        Some(t) => (
            t.royalty_min_pct.to_string(),
            t.royalty_max_pct.to_string(),
            t.royalty_ramp_years.to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    vec![
        inputs.clinical.phase.to_string(),
        inputs.clinical.indication.clone(),
        format!("{:?}", inputs.role),
        c.peak_sales.to_string(),
        c.launch_year.to_string(),
        c.loe_year.to_string(),
        c.discount_rate.to_string(),
        c.tax_rate.to_string(),
        c.cogs_fraction.to_string(),
        c.commercial_spend_fraction.to_string(),
        c.working_capital_fraction.to_string(),
        min,
        max,
        ramp,
        m.potency_nm.to_string(),
        m.selectivity_fold.to_string(),
        m.half_life_hr.to_string(),
        m.molecular_weight_da.to_string(),
        m.log_p.to_string(),
        m.bioavailability.to_string(),
        m.target_validation.to_string(),
        m.target_novelty.to_string(),
        outputs.mechanism_bonus.to_string(),
        outputs.baseline_probability.to_string(),
        outputs.ptrs.to_string(),
        outputs.dev_cost_pv.to_string(),
        outputs.owner_pv.to_string(),
        outputs.licensor_pv.to_string(),
        outputs.rnpv.to_string(),
        outputs.roi.to_string(),
        outputs.average_royalty_pct.to_string(),
        inputs.licensing.is_some().to_string(),
    ]
}

/// Write saved valuations as CSV: `id`, `share_id`, `created_at`, then
/// the [`EXPORT_HEADERS`] columns.
pub fn write_csv<W: Write>(writer: W, records: &[ValuationRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["id", "share_id", "created_at"];
    header.extend_from_slice(&EXPORT_HEADERS);
    wtr.write_record(&header)?;

    for r in records {
        let mut row = vec![r.id.to_string(), r.share_id.clone(), r.created_at.to_rfc3339()];
        row.extend(export_row(&r.inputs, &r.outputs));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
