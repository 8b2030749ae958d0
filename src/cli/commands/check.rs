//! Check command implementation
//!
//! Runs only the account-header uniqueness precondition against a file.
//! Useful as a quick sanity pass before a long manual editing session,
//! since a duplicate header makes the clean command refuse the whole file.

use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::services::row_filter;
use crate::cli::args::CheckArgs;
use crate::cli::commands::shared::setup_logging;
use colored::Colorize;
use tracing::info;

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    let document = filesystem::read_document(&args.input_path)?;
    info!(
        "Checking account headers in {}",
        args.input_path.display()
    );

    row_filter::check_account_uniqueness(&document)?;

    let labels: Vec<&str> = document
        .account_header()
        .iter()
        .filter(|label| !label.is_empty())
        .map(String::as_str)
        .collect();

    println!(
        "{} {} unique account headers: {}",
        "OK".green().bold(),
        labels.len(),
        labels.join(", ")
    );

    Ok(())
}
