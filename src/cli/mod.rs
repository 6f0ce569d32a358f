// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands off to the application
// layer, and prints JSON on stdout. Logs go to stderr.
//
// Two commands are supported:
//   1. `recommend` — full pipeline, prints a response envelope
//   2. `entities`  — extraction + filter only, for tuning the
//                    extractor or lexicon

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EntitiesArgs, RecommendArgs};

use crate::application::recommend_use_case::{AdvisorConfig, RecommendParams, RecommendUseCase};
use crate::domain::response::RecommendationResponse;

#[derive(Parser, Debug)]
#[command(
    name = "supplement-advisor",
    version,
    about = "Recommend dietary supplements from DSLD label data for a described case."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Recommend(args) => run_recommend(&args),
            Commands::Entities(args)  => run_entities(&args),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Non-fatal failures become `{"success": false, ...}` with exit 0;
/// a catalog schema mismatch propagates and exits non-zero.
fn run_recommend(args: &RecommendArgs) -> Result<()> {
    let config = AdvisorConfig::from(&args.source);
    let params = RecommendParams::from(args);

    tracing::info!("Recommending for age {} from '{}'", params.age, config.data_dir.display());

    let response = match RecommendUseCase::from_config(&config) {
        Ok(use_case) => use_case.respond(&params)?,
        Err(e) => {
            tracing::warn!("Cannot set up advisor: {}", e);
            RecommendationResponse::failure(e.user_message())
        }
    };

    print_json(&response)
}

fn run_entities(args: &EntitiesArgs) -> Result<()> {
    let config = AdvisorConfig::from(&args.source);

    let result = RecommendUseCase::from_config(&config)
        .and_then(|use_case| use_case.entities(&args.description));

    match result {
        Ok(entities) => print_json(&entities),
        Err(e) => {
            tracing::warn!("Entity extraction failed: {}", e);
            print_json(&RecommendationResponse::failure(e.user_message()))
        }
    }
}
