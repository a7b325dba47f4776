//! pharmval-sources — External data collaborators feeding the engine.
//!
//! Each source is a trait with an in-memory mock for tests and a JSON-file
//! implementation for offline use. Networked implementations can sit behind
//! the same traits.

pub mod loe_source;
pub mod trial_source;

pub use loe_source::{lookup_loe_year, JsonFileLoeSource, LoeSource, MockLoeSource};
pub use trial_source::{phase_for_trial, JsonFileTrialSource, MockTrialSource, TrialSource};
