//! dutch_stake - Main Entry Point
//!
//! Reads one allocation request (header line plus one entry per line)
//! and prints the equal-payout stakes.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::{debug, info, Level};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use dutch_stake::config::load_config;
use dutch_stake::OutputFormat;

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the request; stdin when neither this nor --text is given
    input: Option<String>,

    /// Request text given inline, e.g. $'2u $10\nAlice 1/1\nBob 3/1'
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "dutch.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DUTCH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Leave out the units column
    #[arg(long)]
    no_units: bool,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(args.config.as_str()))?;

    // Initialize logging
    let level_name = args
        .log_level
        .as_deref()
        .unwrap_or(config.settings.log_level.as_str())
        .to_lowercase();
    let level = match level_name.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // RUST_LOG directives win over the configured level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);

    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };
    debug!(bytes = text.len(), "Read request");

    let report = dutch_stake::run(&text)?;

    let format = args.format.unwrap_or(config.report.format);
    let show_units = config.report.show_units && !args.no_units;
    println!("{}", report.render(format, show_units)?);

    info!(entries = report.rows.len(), "Allocation printed");
    Ok(())
}
