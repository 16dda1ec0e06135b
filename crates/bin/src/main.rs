//! QuantSnap CLI binary.
//!
//! Provides the command-line interface for building factor-based stock
//! leaderboards.

mod fetch;

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use fetch::{FetchConfig, fetch_ticker, fetch_universe_with_progress, print_cache_info};
use indicatif::{ProgressBar, ProgressStyle};
use quantsnap::ScoringEngine;
use quantsnap::universe::{available_universes, universe_by_name};
use quantsnap_data::yahoo::{YahooFundamentalsProvider, YahooQuoteProvider};
use quantsnap_output::{ExportFormat, Exporter};
use quantsnap_score::ScoringConfig;
use std::path::PathBuf;
use std::process;
use std::time::Duration as StdDuration;

#[derive(Parser)]
#[command(name = "quantsnap")]
#[command(about = "QuantSnap: factor-based stock ranking", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a ranked leaderboard for a universe
    Rank {
        /// Universe to rank
        #[arg(long, default_value = "popular_stocks")]
        universe: String,

        /// Number of tickers to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// History window in trading-year equivalents
        #[arg(long, default_value = "1")]
        years: u32,

        /// Output format (text, markdown, json or csv)
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to a JSON scoring configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable caching (always fetch fresh data)
        #[arg(long)]
        no_cache: bool,

        /// Force refresh cached data
        #[arg(long)]
        refresh: bool,
    },

    /// Score a single symbol and show the factor breakdown
    Analyze {
        /// Stock symbol
        symbol: String,

        /// History window in trading-year equivalents
        #[arg(long, default_value = "1")]
        years: u32,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Disable caching (always fetch fresh data)
        #[arg(long)]
        no_cache: bool,
    },

    /// List the bundled universes
    Universes,

    /// Show cache location and contents
    Cache,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            universe,
            top,
            years,
            format,
            config,
            no_cache,
            refresh,
        } => {
            let fetch_config = FetchConfig {
                use_cache: !no_cache,
                force_refresh: refresh,
            };
            rank_universe(&universe, top, years, &format, config, fetch_config).await?;
        }
        Commands::Analyze {
            symbol,
            years,
            json,
            no_cache,
        } => {
            analyze_symbol(&symbol, years, json, no_cache).await?;
        }
        Commands::Universes => {
            list_universes();
        }
        Commands::Cache => {
            print_cache_info();
        }
    }

    Ok(())
}

async fn rank_universe(
    universe_name: &str,
    top: usize,
    years: u32,
    format: &str,
    config_path: Option<PathBuf>,
    fetch_config: FetchConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let universe = universe_by_name(universe_name)
        .ok_or_else(|| format!("Unknown universe: {} (try `quantsnap universes`)", universe_name))?;

    // Load and validate the scoring configuration before any fetching
    let scoring_config = match config_path {
        Some(path) => ScoringConfig::from_json_file(path)?,
        None => ScoringConfig::default(),
    };
    let engine = ScoringEngine::new(scoring_config)?;

    let symbols = universe.symbols();
    println!("Ranking {} ({} tickers)", universe.name(), symbols.len());
    if fetch_config.use_cache {
        print_cache_info();
        if fetch_config.force_refresh {
            println!("  Mode: Force refresh (re-fetching all data)");
        }
    } else {
        println!("  Cache: Disabled");
    }
    println!();

    let quotes = YahooQuoteProvider::new();
    let fundamentals = YahooFundamentalsProvider::new();
    let end = Utc::now();
    let start = end - Duration::days(years as i64 * 365);

    // Progress bar for data fetching (the slow step)
    let pb = ProgressBar::new(symbols.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(StdDuration::from_millis(100));
    pb.set_message("Fetching universe data...");

    let tickers = match fetch_universe_with_progress(
        &quotes,
        &fundamentals,
        &symbols,
        start,
        end,
        fetch_config,
        Some(&pb),
    )
    .await
    {
        Ok(t) => {
            pb.finish_with_message(format!("Fetched {} of {} tickers", t.len(), symbols.len()));
            t
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            return Err(format!("Failed to fetch universe data: {}", e).into());
        }
    };

    let board = engine.evaluate_top_n(universe.name(), &tickers, top);

    match format.to_lowercase().as_str() {
        "text" => print!("{}", board.to_ascii_table()),
        "markdown" | "md" => print!("{}", board.to_markdown()),
        "json" => println!("{}", board.export_to_string(ExportFormat::PrettyJson)?),
        "csv" => print!("{}", board.export_to_string(ExportFormat::Csv)?),
        other => return Err(format!("Unknown format: {}", other).into()),
    }

    Ok(())
}

async fn analyze_symbol(
    symbol: &str,
    years: u32,
    json: bool,
    no_cache: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = symbol.to_uppercase();

    let quotes = YahooQuoteProvider::new();
    let fundamentals = YahooFundamentalsProvider::new();
    let end = Utc::now();
    let start = end - Duration::days(years as i64 * 365);

    let cache = if no_cache {
        None
    } else {
        fetch::open_cache().ok()
    };

    let data = fetch_ticker(
        &quotes,
        &fundamentals,
        cache.as_ref(),
        &symbol,
        start,
        end,
        false,
    )
    .await?;

    let engine = ScoringEngine::with_defaults();
    let report = engine.report(&data);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_ascii_table());
    }

    Ok(())
}

fn list_universes() {
    println!("Bundled universes:");
    println!("==================\n");

    for name in available_universes() {
        if let Some(universe) = universe_by_name(name) {
            println!("  {:<20} {:>4} tickers", name, universe.size());
        }
    }
}
