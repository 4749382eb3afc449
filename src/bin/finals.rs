//! Terminal front end for the finals dashboard queries.
//!
//! Runs the same query service as the HTTP API without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Map values for a metric (default: primary_count)
//! cargo run --bin finals -- aggregate --metric total_count
//!
//! # Year panel
//! cargo run --bin finals -- edition 1974
//!
//! # Country panel
//! cargo run --bin finals -- history Germany
//!
//! # Validate a dataset file
//! DATASET_PATH=./my_finals.json cargo run --bin finals -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATASET_PATH` (optional): JSON dataset replacing the embedded one

use finals_dashboard::domain::entities::{EditionKey, Metric};
use finals_dashboard::infrastructure::dataset::Dataset;
use finals_dashboard::state::{AppState, DashboardQueryService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// Query World Cup finals from the terminal.
#[derive(Parser)]
#[command(name = "finals")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset file (overrides DATASET_PATH; defaults to the embedded dataset)
    #[arg(long, global = true)]
    dataset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Per-country values of a metric, as shown on the map
    Aggregate {
        /// primary_count, secondary_count or total_count
        #[arg(short, long, default_value = "primary_count")]
        metric: String,
    },

    /// Details of a single final
    Edition {
        /// Tournament year
        edition_key: EditionKey,
    },

    /// A country's finals history
    History {
        /// Canonical country name (e.g. "Germany")
        canonical_id: String,
    },

    /// Validate the dataset and print a summary
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let dataset_path = cli
        .dataset
        .or_else(|| std::env::var("DATASET_PATH").ok());
    let dataset = Dataset::load(dataset_path.as_deref()).context("Failed to load dataset")?;
    let state = AppState::from_dataset(dataset).context("Dataset failed integrity checks")?;
    let service = state.query_service.as_ref();

    match cli.command {
        Commands::Aggregate { metric } => print_aggregate(service, &metric)?,
        Commands::Edition { edition_key } => print_edition(service, edition_key)?,
        Commands::History { canonical_id } => print_history(service, &canonical_id),
        Commands::Check => print_check(service),
    }

    Ok(())
}

/// Prints the map view sorted by value, highest first.
///
/// ```text
/// World Cup Wins
///
///   Country              Code   Value
///   ─────────────────────────────────
///   Brazil               BRA    5
///   Germany              DEU    4
/// ```
fn print_aggregate(service: &DashboardQueryService, metric: &str) -> Result<()> {
    let metric: Metric = metric.parse()?;
    let mut entries = service.aggregate_view_for(metric);
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.entity.cmp(&b.entity)));

    println!("{}", metric.label().bright_blue().bold());
    println!();
    println!(
        "  {:<20} {:<6} {}",
        "Country".bright_white().bold(),
        "Code".bright_white().bold(),
        "Value".bright_white().bold()
    );
    println!("  {}", "─".repeat(33).bright_black());

    for entry in &entries {
        println!(
            "  {:<20} {:<6} {}",
            entry.entity.cyan(),
            entry.code.bright_black(),
            entry.value.to_string().bright_green().bold()
        );
    }

    let hidden = service.aggregates().len() - entries.len();
    if hidden > 0 {
        println!();
        println!(
            "  {}",
            format!("{hidden} countries without a map code not shown").yellow()
        );
    }
    println!();

    Ok(())
}

fn print_edition(service: &DashboardQueryService, edition_key: EditionKey) -> Result<()> {
    let detail = service.edition_detail(edition_key)?;

    println!(
        "{}",
        format!("World Cup {}", detail.edition_key).bright_blue().bold()
    );
    println!();
    println!("  Winner:    {}", detail.primary_display_name.green().bold());
    println!("  Runner-up: {}", detail.secondary_display_name.cyan());
    println!("  Score:     {}", detail.result_summary);
    println!("  Venue:     {}", detail.location);
    println!();

    Ok(())
}

fn print_history(service: &DashboardQueryService, canonical_id: &str) {
    if !service.is_known_entity(canonical_id) {
        println!(
            "{}",
            format!("⚠️  {canonical_id} has not reached a World Cup final").yellow()
        );
        return;
    }

    let history = service.entity_history(canonical_id);

    println!(
        "{}",
        format!("{} World Cup History", history.canonical_id)
            .bright_blue()
            .bold()
    );
    println!();
    println!(
        "  Total Wins: {}",
        history.primary_count.to_string().bright_green().bold()
    );
    println!("  {}", join_editions("Won in", &history.primary_editions, "No wins"));
    println!(
        "  Runner-up Appearances: {}",
        history.secondary_count.to_string().bright_green().bold()
    );
    println!(
        "  {}",
        join_editions(
            "Runner-up in",
            &history.secondary_editions,
            "No runner-up appearances"
        )
    );
    println!();
}

fn join_editions(prefix: &str, editions: &[EditionKey], empty: &str) -> String {
    if editions.is_empty() {
        return empty.to_string();
    }
    let years: Vec<String> = editions.iter().map(ToString::to_string).collect();
    format!("{prefix}: {}", years.join(", "))
}

fn print_check(service: &DashboardQueryService) {
    let entities = service.known_entities();
    let unmapped: Vec<&str> = entities
        .iter()
        .filter(|entity| !entity.is_map_eligible())
        .map(|entity| entity.canonical_id.as_str())
        .collect();

    println!("{}", "✅ Dataset is valid".green().bold());
    println!();
    println!(
        "  Editions:     {}",
        service.editions().len().to_string().bright_green().bold()
    );
    println!(
        "  Countries:    {}",
        entities.len().to_string().bright_green().bold()
    );
    println!(
        "  Aliases:      {}",
        service.normalizer().alias_count().to_string().bright_white()
    );
    println!(
        "  Name overrides: {}",
        service.normalizer().override_count().to_string().bright_white()
    );
    if let Some(latest) = service.default_edition() {
        println!("  Latest:       {}", latest.to_string().bright_white());
    }
    if !unmapped.is_empty() {
        println!();
        println!(
            "  {} {}",
            "Without map code:".yellow(),
            unmapped.join(", ")
        );
    }
    println!();
}
