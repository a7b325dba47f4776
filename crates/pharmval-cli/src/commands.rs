//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pharmval_common::{PharmvalError, ValuationInputs};
use pharmval_db::{InMemoryValuationStore, JsonFileValuationStore, ValuationStore};
use pharmval_engine::{cashflow_schedule, compose, validate, ValuationWarning};
use pharmval_sources::{
    lookup_loe_year, phase_for_trial, JsonFileLoeSource, JsonFileTrialSource, TrialSource,
};
use serde_json::json;
use tracing::{info, warn};

use crate::config::{Config, StoreBackend};

async fn open_store(config: &Config) -> anyhow::Result<Box<dyn ValuationStore>> {
    let store: Box<dyn ValuationStore> = match config.store.backend {
        StoreBackend::File => Box::new(JsonFileValuationStore::open(&config.store.path).await?),
        StoreBackend::Memory => Box::new(InMemoryValuationStore::new()),
    };
    Ok(store)
}

fn load_inputs(path: &Path) -> anyhow::Result<ValuationInputs> {
    ValuationInputs::from_path(path)
        .with_context(|| format!("Could not load inputs from {}", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Log every warning; in strict mode a non-empty list aborts.
fn check_warnings(warnings: &[ValuationWarning], strict: bool) -> anyhow::Result<()> {
    for w in warnings {
        warn!("{w}");
    }
    if strict && !warnings.is_empty() {
        let joined = warnings.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        return Err(PharmvalError::Validation(joined).into());
    }
    Ok(())
}

pub struct ValueArgs {
    pub inputs: PathBuf,
    pub current_year: Option<i32>,
    pub product: Option<String>,
    pub save: bool,
    pub strict: bool,
}

pub async fn value(config: &Config, args: ValueArgs) -> anyhow::Result<()> {
    let mut inputs = load_inputs(&args.inputs)?;

    if let Some(product) = args.product.as_deref() {
        match &config.sources.loe_records {
            Some(path) => {
                let source = JsonFileLoeSource::load(path)?;
                match lookup_loe_year(&source, product) {
                    Some(year) => {
                        info!(product, loe_year = year, "LOE year taken from patent records");
                        inputs.commercial.loe_year = year;
                    }
                    None => warn!(product, "No LOE year resolved; keeping input value"),
                }
            }
            None => warn!("--product given but sources.loe_records is not configured"),
        }
    }

    let warnings = validate(&inputs);
    check_warnings(&warnings, args.strict || config.valuation.strict)?;

    let current_year = args.current_year.unwrap_or_else(|| config.current_year());
    let outputs = compose(&inputs, current_year);
    info!(
        phase = %inputs.clinical.phase,
        role = ?inputs.role,
        rnpv = outputs.rnpv,
        roi = outputs.roi,
        "Valuation computed"
    );

    let saved = if args.save {
        if !config.store.backend.is_persistent() {
            warn!("Saving to the memory backend; the record is lost when pharmval exits");
        }
        let store = open_store(config).await?;
        let record = store.save(inputs, outputs.clone()).await?;
        info!(id = %record.id, share_id = %record.share_id, "Valuation saved");
        Some(json!({ "id": record.id, "share_id": record.share_id }))
    } else {
        None
    };

    print_json(&json!({
        "current_year": current_year,
        "outputs": outputs,
        "warnings": warnings,
        "saved": saved,
    }))
}

pub fn schedule(config: &Config, inputs: &Path, current_year: Option<i32>) -> anyhow::Result<()> {
    let inputs = load_inputs(inputs)?;
    let current_year = current_year.unwrap_or_else(|| config.current_year());
    print_json(&cashflow_schedule(&inputs, current_year))
}

pub fn validate_inputs(inputs: &Path) -> anyhow::Result<()> {
    let inputs = load_inputs(inputs)?;
    let warnings = validate(&inputs);
    print_json(&warnings)?;
    check_warnings(&warnings, true)
}

pub async fn show(config: &Config, key: &str) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let record = store
        .find(key)
        .await?
        .ok_or_else(|| PharmvalError::NotFound(format!("valuation {key}")))?;
    print_json(&record)
}

pub async fn export(config: &Config, out: Option<&Path>) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let records = store.list().await?;
    match out {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            pharmval_db::write_csv(file, &records)?;
            info!(n = records.len(), path = %path.display(), "Valuations exported");
        }
        None => pharmval_db::write_csv(std::io::stdout().lock(), &records)?,
    }
    Ok(())
}

pub fn loe(config: &Config, product: &str) -> anyhow::Result<()> {
    let path = config
        .sources
        .loe_records
        .as_ref()
        .ok_or_else(|| PharmvalError::Config("sources.loe_records is not set".into()))?;
    let source = JsonFileLoeSource::load(path)?;
    print_json(&json!({ "product": product, "loe_year": lookup_loe_year(&source, product) }))
}

pub fn trial_phase(config: &Config, nct_id: &str) -> anyhow::Result<()> {
    let path = config
        .sources
        .trials
        .as_ref()
        .ok_or_else(|| PharmvalError::Config("sources.trials is not set".into()))?;
    let source = JsonFileTrialSource::load(path)?;
    let trial = source.trial(nct_id);
    print_json(&json!({
        "nct_id": nct_id,
        "label": trial.as_ref().and_then(|t| t.phase.clone()),
        "phase": phase_for_trial(&source, nct_id),
    }))
}

pub fn template(out: Option<&Path>) -> anyhow::Result<()> {
    let inputs = ValuationInputs::default();
    match out {
        Some(path) => {
            inputs.to_yaml(path)?;
            info!(path = %path.display(), "Template inputs written");
        }
        None => print!("{}", inputs.to_yaml_string()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmval_common::PatentRecord;

    fn memory_config() -> Config {
        let mut config = Config::default();
        config.store.backend = StoreBackend::Memory;
        config.valuation.current_year = Some(2026);
        config
    }

    #[test]
    fn test_strict_mode_rejects_warnings() {
        let warnings = vec![ValuationWarning::UnknownPhase];
        assert!(check_warnings(&warnings, false).is_ok());
        let err = check_warnings(&warnings, true).unwrap_err();
        assert!(err.to_string().contains("unknown clinical phase"));
        assert!(check_warnings(&[], true).is_ok());
    }

    #[tokio::test]
    async fn test_value_command_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asset.yaml");
        ValuationInputs::default().to_yaml(&path).unwrap();

        let args = ValueArgs {
            inputs: path,
            current_year: None,
            product: None,
            save: true,
            strict: true,
        };
        assert!(value(&memory_config(), args).await.is_ok());
    }

    #[tokio::test]
    async fn test_value_strict_fails_on_empty_horizon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asset.json");
        let mut inputs = ValuationInputs::default();
        inputs.commercial.loe_year = inputs.commercial.launch_year;
        std::fs::write(&path, serde_json::to_string(&inputs).unwrap()).unwrap();

        let args = ValueArgs {
            inputs: path,
            current_year: None,
            product: None,
            save: false,
            strict: true,
        };
        assert!(value(&memory_config(), args).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_inputs_file() {
        let args = ValueArgs {
            inputs: PathBuf::from("/nonexistent/asset.yaml"),
            current_year: None,
            product: None,
            save: false,
            strict: false,
        };
        let err = value(&memory_config(), args).await.unwrap_err();
        assert!(err.to_string().contains("Could not load inputs"));
    }

    #[test]
    fn test_loe_requires_configured_source() {
        assert!(loe(&memory_config(), "Imatinib").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let records = vec![PatentRecord {
            product_name: Some("Imatinib".into()),
            patent_expiry: Some("2031-05-28".into()),
            ..Default::default()
        }];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let mut config = memory_config();
        config.sources.loe_records = Some(path.display().to_string());
        assert!(loe(&config, "Imatinib").is_ok());
    }

    #[tokio::test]
    async fn test_show_unknown_key() {
        let err = show(&memory_config(), "missing").await.unwrap_err();
        assert!(err.to_string().contains("Not found"));
    }
}
