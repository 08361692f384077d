mod config;
mod core;
mod models;
mod services;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::core::Recommender;
use crate::models::{UserId, UserTable};

/// Amity Match - interest-overlap match recommendations
#[derive(Parser)]
#[command(name = "amity-match")]
#[command(about = "Recommend matches for a user by shared interests", long_about = None)]
struct Cli {
    /// User ID to recommend matches for
    #[arg(long)]
    user_id: UserId,

    /// Dataset file (CSV, or JSON when the extension is .json); defaults to
    /// the configured dataset.path, then to the built-in sample dataset
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Maximum number of matches to return; defaults to matching.top_n
    #[arg(long)]
    limit: Option<usize>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration ({}), using defaults", e);
        Settings::default()
    });

    let table = load_table(&cli, &settings)?;
    info!("Loaded {} user profiles", table.len());

    let recommender = Recommender::new(&table)?;
    let limit = cli.limit.unwrap_or(settings.matching.top_n);
    let result = recommender
        .rank_candidates(cli.user_id, limit)
        .with_context(|| format!("Recommendation failed for user {}", cli.user_id))?;

    info!(
        "Ranked {} of {} eligible candidates for user {}",
        result.matches.len(),
        result.total_candidates,
        cli.user_id
    );

    if cli.json {
        let output = serde_json::json!({
            "userId": cli.user_id,
            "totalCandidates": result.total_candidates,
            "matches": result.matches,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Top matches for user {}:", cli.user_id);
        for (rank, m) in result.matches.iter().enumerate() {
            println!(
                "  {}. user {} ({} shared: {})",
                rank + 1,
                m.user_id,
                m.shared_interest_count,
                m.shared_interests.join(", ")
            );
        }
        if result.matches.is_empty() {
            println!("  (no eligible candidates)");
        }
    }

    Ok(())
}

/// Resolve the dataset source: CLI flag, then settings, then the fixture
fn load_table(cli: &Cli, settings: &Settings) -> Result<UserTable> {
    let path = cli
        .data
        .clone()
        .or_else(|| settings.dataset.path.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            let table = if path.extension().is_some_and(|ext| ext == "json") {
                services::loader::load_json_path(&path)
            } else {
                services::loader::load_csv_path(&path)
            };
            table.with_context(|| format!("Failed to load dataset from {}", path.display()))
        }
        None => {
            info!("No dataset configured, using built-in sample profiles");
            Ok(services::fixture::sample_table())
        }
    }
}
