//! Command implementations for the ledger cleaner CLI
//!
//! Each command lives in its own module; `shared` holds logging setup and
//! report printing used by both.

pub mod check;
pub mod clean;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the ledger cleaner
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `clean`: the full sanitizing workflow with CSV output
/// - `check`: account-header duplicate validation only
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Clean(clean_args) => clean::run_clean(clean_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
