//! pharmval-common — Shared types and errors used across all pharmval crates.

pub mod error;
pub mod phase;
pub mod inputs;
pub mod outputs;
pub mod records;

// Re-export commonly used types
pub use error::{PharmvalError, Result};
pub use inputs::{
    ClinicalProfile, CommercialAssumptions, LicensingTerms, MechanisticProps, Role,
    ValuationInputs,
};
pub use outputs::ValuationOutputs;
pub use phase::Phase;
pub use records::{PatentRecord, TrialMetadata};
