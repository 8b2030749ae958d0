//! Command-line argument definitions for the ledger cleaner
//!
//! Defines the complete CLI interface using the clap derive API. The
//! pipeline itself is argument-free; everything here is about where files
//! live and how the run reports itself.

use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ledger cleaner
///
/// Normalizes hand-annotated cryptocurrency transaction CSV exports into
/// strictly machine-parseable importer input.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ledger-cleaner",
    version,
    about = "Normalize hand-annotated transaction CSV exports for importing",
    long_about = "Strips reader-friendly annotations out of a transaction CSV export: \
                  notes and subtotal rows beneath the transactions, unlabeled running-balance \
                  and flag columns, accountant-style (1,000.00) negatives and thousands \
                  separators. The result is a strictly machine-parseable CSV with the same \
                  4-header-row convention."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ledger cleaner
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Clean an annotated export into importer-ready CSV (main command)
    Clean(CleanArgs),
    /// Check the account-header row for duplicates without writing anything
    Check(CheckArgs),
}

/// Arguments for the clean command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    /// Input path to the hand-annotated CSV export
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the annotated CSV export"
    )]
    pub input_path: PathBuf,

    /// Output path for the sanitized CSV
    ///
    /// If not specified, the input path with `-cleaned` appended to the file
    /// stem is used, e.g. DigiTrnx.csv -> DigiTrnx-cleaned.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the sanitized CSV"
    )]
    pub output_path: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force_overwrite: bool,

    /// Perform a dry run without writing any output
    ///
    /// Reads and sanitizes the input, reports what would be written, and
    /// discards the result. Useful for previewing a cleanup.
    #[arg(long = "dry-run", help = "Report what would be written without writing it")]
    pub dry_run: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (header validation only)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input path to the hand-annotated CSV export
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the annotated CSV export"
    )]
    pub input_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the run summary
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl CleanArgs {
    /// Build the run configuration from these arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(&self.input_path)
            .with_force_overwrite(self.force_overwrite)
            .with_dry_run(self.dry_run)
            .with_progress(self.show_progress());

        if let Some(output) = &self.output_path {
            config = config.with_output(output);
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_args() -> CleanArgs {
        CleanArgs {
            input_path: PathBuf::from("in.csv"),
            output_path: None,
            force_overwrite: false,
            dry_run: false,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_log_level() {
        let mut args = clean_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = clean_args();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_to_config_defaults_output() {
        let config = clean_args().to_config();
        assert_eq!(config.output_path, PathBuf::from("in-cleaned.csv"));
        assert!(!config.force_overwrite);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_to_config_explicit_output() {
        let mut args = clean_args();
        args.output_path = Some(PathBuf::from("elsewhere.csv"));
        args.force_overwrite = true;

        let config = args.to_config();
        assert_eq!(config.output_path, PathBuf::from("elsewhere.csv"));
        assert!(config.force_overwrite);
    }

    #[test]
    fn test_clap_parses_clean_command() {
        let args = Args::parse_from(["ledger-cleaner", "clean", "--input", "trnx.csv", "--force"]);
        match args.get_command() {
            Commands::Clean(clean) => {
                assert_eq!(clean.input_path, PathBuf::from("trnx.csv"));
                assert!(clean.force_overwrite);
            }
            other => panic!("expected clean command, got {:?}", other),
        }
    }
}
