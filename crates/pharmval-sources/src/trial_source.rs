//! Trait for trial registry metadata access.

use std::collections::HashMap;
use std::path::Path;

use pharmval_common::{Phase, Result, TrialMetadata};
use tracing::{debug, warn};

/// Source of trial metadata keyed by registry id (e.g. `NCT04956640`).
pub trait TrialSource: Send + Sync {
    fn trial(&self, nct_id: &str) -> Option<TrialMetadata>;
}

/// Map a trial's free-text phase label onto a phase key.
///
/// Returns `None` if the trial is unknown, has no phase, or the label
/// cannot be mapped.
pub fn phase_for_trial(source: &dyn TrialSource, nct_id: &str) -> Option<Phase> {
    let trial = source.trial(nct_id)?;
    let label = trial.phase.as_deref()?;
    let phase = Phase::from_trial_label(label);
    if phase.is_none() {
        warn!(nct_id, label, "Unmappable trial phase label");
    }
    phase
}

// ── Mock Implementation for Testing ────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockTrialSource {
    trials: HashMap<String, TrialMetadata>,
}

impl MockTrialSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, nct_id: &str, phase: &str) -> Self {
        self.trials.insert(
            nct_id.to_string(),
            TrialMetadata {
                nct_id: Some(nct_id.to_string()),
                phase: Some(phase.to_string()),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_trial(mut self, trial: TrialMetadata) -> Self {
        if let Some(id) = trial.nct_id.clone() {
            self.trials.insert(id, trial);
        }
        self
    }
}

impl TrialSource for MockTrialSource {
    fn trial(&self, nct_id: &str) -> Option<TrialMetadata> {
        self.trials.get(nct_id).cloned()
    }
}

// ── JSON file ──────────────────────────────────────────────────────────────

/// Trials loaded once from a JSON array; entries without an id are skipped.
#[derive(Debug)]
pub struct JsonFileTrialSource {
    trials: HashMap<String, TrialMetadata>,
}

impl JsonFileTrialSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let list: Vec<TrialMetadata> = serde_json::from_str(&content)?;
        let total = list.len();
        let trials: HashMap<String, TrialMetadata> = list
            .into_iter()
            .filter_map(|t| t.nct_id.clone().map(|id| (id, t)))
            .collect();
        if trials.len() < total {
            warn!(skipped = total - trials.len(), "Trials without nct_id ignored");
        }
        debug!(path = %path.display(), n = trials.len(), "Loaded trial metadata");
        Ok(Self { trials })
    }
}

impl TrialSource for JsonFileTrialSource {
    fn trial(&self, nct_id: &str) -> Option<TrialMetadata> {
        self.trials.get(nct_id).cloned()
    }
}
