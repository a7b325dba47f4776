//! Records supplied by external collaborators.

use serde::{Deserialize, Serialize};

/// Patent or regulatory exclusivity record for a marketed product.
/// Dates are ISO strings as delivered by the source; parsing happens
/// in the LOE resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatentRecord {
    #[serde(default)]
    pub application_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub patent_expiry: Option<String>,
    #[serde(default)]
    pub exclusivity_expiry: Option<String>,
}

/// Trial registry metadata. The phase label is free text and must be
/// mapped through `Phase::from_trial_label` before reaching the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialMetadata {
    #[serde(default)]
    pub nct_id: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub sponsor: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}
