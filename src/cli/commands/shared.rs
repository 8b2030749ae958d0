//! Shared helpers for CLI commands
//!
//! Logging setup and run-summary printing used by both the clean and check
//! commands.

use crate::Result;
use crate::app::services::sanitizer::SanitizeStats;
use crate::cli::args::OutputFormat;
use crate::config::Config;
use colored::Colorize;
use tracing::debug;

/// Set up structured logging to stderr
///
/// The level comes from the verbosity flags unless `RUST_LOG` overrides it.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ledger_cleaner={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the run summary in the requested format
pub fn print_report(
    config: &Config,
    stats: &SanitizeStats,
    format: &OutputFormat,
    quiet: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "input": config.input_path,
                "output": config.output_path,
                "dry_run": config.dry_run,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if quiet {
                return Ok(());
            }

            if config.dry_run {
                println!("{}", "Dry run - no output written".yellow().bold());
            } else {
                println!(
                    "{} {}",
                    "Input file ready:".green().bold(),
                    config.output_path.display()
                );
            }
            println!(
                "  rows:    {} kept, {} dropped",
                stats.rows_kept, stats.rows_dropped
            );
            println!(
                "  columns: {} kept of {}",
                stats.columns_kept, stats.columns_in
            );
            println!(
                "  fields:  {} negatives converted, {} numbers comma-stripped",
                stats.negatives_converted, stats.numbers_stripped
            );
        }
    }

    Ok(())
}
