//! pharmval — Risk-adjusted NPV for pharmaceutical assets.
//! Entry point for the command-line binary.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pharmval", version, about = "Risk-adjusted NPV for pharmaceutical assets")]
struct Cli {
    /// Path to pharmval.toml
    #[arg(long, env = "PHARMVAL_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute PTRS, rNPV and ROI for an inputs file (YAML or JSON)
    Value {
        inputs: PathBuf,
        /// Discounting reference year
        #[arg(long)]
        current_year: Option<i32>,
        /// Take the LOE year from the configured patent records for this product
        #[arg(long)]
        product: Option<String>,
        /// Persist the result and print its share id
        #[arg(long)]
        save: bool,
        /// Fail if the inputs produce validation warnings
        #[arg(long)]
        strict: bool,
    },
    /// Print the year-by-year cash-flow schedule
    Schedule {
        inputs: PathBuf,
        #[arg(long)]
        current_year: Option<i32>,
    },
    /// Report validation warnings; exits non-zero if there are any
    Validate { inputs: PathBuf },
    /// Load a saved valuation by id or share id
    Show { key: String },
    /// Export all saved valuations as CSV
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Resolve the loss-of-exclusivity year for a product
    Loe { product: String },
    /// Map a trial's registry phase onto a phase key
    TrialPhase { nct_id: String },
    /// Write a starter inputs file
    Template {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = config::Config::resolve_path(cli.config.as_deref());
    let config = config::Config::load(&config_path)?;

    // Initialise structured logging on stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("pharmval {}", env!("CARGO_PKG_VERSION"));
    if config_path.exists() {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        debug!(path = %config_path.display(), "No config file; using defaults");
    }

    match cli.command {
        Command::Value { inputs, current_year, product, save, strict } => {
            commands::value(
                &config,
                commands::ValueArgs { inputs, current_year, product, save, strict },
            )
            .await
        }
        Command::Schedule { inputs, current_year } => {
            commands::schedule(&config, &inputs, current_year)
        }
        Command::Validate { inputs } => commands::validate_inputs(&inputs),
        Command::Show { key } => commands::show(&config, &key).await,
        Command::Export { out } => commands::export(&config, out.as_deref()).await,
        Command::Loe { product } => commands::loe(&config, &product),
        Command::TrialPhase { nct_id } => commands::trial_phase(&config, &nct_id),
        Command::Template { out } => commands::template(out.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_value_flags() {
        let cli = Cli::parse_from([
            "pharmval", "value", "asset.yaml", "--current-year", "2027", "--save",
        ]);
        match cli.command {
            Command::Value { inputs, current_year, save, strict, product } => {
                assert_eq!(inputs, PathBuf::from("asset.yaml"));
                assert_eq!(current_year, Some(2027));
                assert!(save);
                assert!(!strict);
                assert!(product.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_trial_phase() {
        let cli = Cli::parse_from(["pharmval", "trial-phase", "NCT04956640"]);
        assert!(matches!(cli.command, Command::TrialPhase { ref nct_id } if nct_id == "NCT04956640"));
    }
}
