//! Clinical development phase of an asset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Development phase. Any unrecognised serialized key lands in `Unknown`,
/// which the phase table resolves to zero probability and zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Preclinical,
    #[serde(alias = "Phase I")]
    PhaseI,
    #[serde(alias = "Phase II")]
    PhaseII,
    #[serde(alias = "Phase III")]
    PhaseIII,
    #[serde(rename = "NDA")]
    Nda,
    Approved,
    #[serde(other)]
    Unknown,
}

impl Phase {
    /// Every known phase, earliest first.
    pub const ALL: [Phase; 6] = [
        Phase::Preclinical,
        Phase::PhaseI,
        Phase::PhaseII,
        Phase::PhaseIII,
        Phase::Nda,
        Phase::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Preclinical => "Preclinical",
            Phase::PhaseI => "PhaseI",
            Phase::PhaseII => "PhaseII",
            Phase::PhaseIII => "PhaseIII",
            Phase::Nda => "NDA",
            Phase::Approved => "Approved",
            Phase::Unknown => "Unknown",
        }
    }

    /// Map a free-text trial registry label onto a phase key.
    ///
    /// Handles ClinicalTrials.gov codes (`PHASE2`, `EARLY_PHASE1`) as well as
    /// prose forms (`Phase II`, `Phase 2/Phase 3`). Combined phases map to the
    /// earlier one. Returns `None` for labels such as `N/A`.
    pub fn from_trial_label(label: &str) -> Option<Phase> {
        let norm: String = label
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '/' || *c == ',')
            .collect();
        let first = norm.split(['/', ',']).next().unwrap_or("");

        match first {
            "preclinical" | "discovery" => Some(Phase::Preclinical),
            "earlyphase1" | "phase0" | "phase1" | "phasei" => Some(Phase::PhaseI),
            "phase2" | "phaseii" => Some(Phase::PhaseII),
            "phase3" | "phaseiii" => Some(Phase::PhaseIII),
            "nda" | "bla" | "maa" | "filed" | "submitted" | "registration" => Some(Phase::Nda),
            "approved" | "marketed" | "phase4" | "phaseiv" => Some(Phase::Approved),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
