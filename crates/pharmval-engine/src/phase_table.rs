//! Static phase lookup: base probability of success and remaining
//! development cost (currency units, typically millions).

use pharmval_common::Phase;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseEntry {
    pub probability: f64,
    pub dev_cost: f64,
}

impl PhaseEntry {
    pub const ZERO: PhaseEntry = PhaseEntry { probability: 0.0, dev_cost: 0.0 };
}

/// Look up a phase. `Phase::Unknown` resolves to zero probability and cost.
pub fn lookup(phase: Phase) -> PhaseEntry {
    let (probability, dev_cost) = match phase {
        Phase::Preclinical => (0.12, 200.0),
        Phase::PhaseI => (0.18, 150.0),
        Phase::PhaseII => (0.30, 100.0),
        Phase::PhaseIII => (0.60, 60.0),
        Phase::Nda => (0.90, 15.0),
        Phase::Approved => (1.00, 0.0),
        Phase::Unknown => return PhaseEntry::ZERO,
    };
    PhaseEntry { probability, dev_cost }
}

/// Look up by exact enum key (`"PhaseII"`, `"NDA"`, ...). Anything else
/// resolves to zero; free-text labels must be mapped upstream.
pub fn lookup_key(key: &str) -> PhaseEntry {
    Phase::ALL
        .iter()
        .find(|p| p.as_str() == key)
        .map(|p| lookup(*p))
        .unwrap_or(PhaseEntry::ZERO)
}
