use clap::Parser;
use ledger_cleaner::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the command has already reported its summary
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Ledger Cleaner - Transaction CSV Sanitizer");
    println!("==========================================");
    println!();
    println!("Normalize a hand-annotated cryptocurrency transaction CSV export into");
    println!("strictly machine-parseable importer input: drop note and subtotal rows,");
    println!("prune unlabeled working columns, and rewrite (1,000.00) to -1000.00.");
    println!();
    println!("USAGE:");
    println!("    ledger-cleaner <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    clean       Clean an annotated export into importer-ready CSV (main command)");
    println!("    check       Check the account-header row for duplicates");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean an export next to the original:");
    println!("    ledger-cleaner clean --input DigiTrnx.csv");
    println!();
    println!("    # Clean to an explicit path, overwriting a previous run:");
    println!("    ledger-cleaner clean --input DigiTrnx.csv --output input.csv --force");
    println!();
    println!("    # Preview without writing anything:");
    println!("    ledger-cleaner clean --input DigiTrnx.csv --dry-run");
    println!();
    println!("    # Validate account headers only:");
    println!("    ledger-cleaner check --input DigiTrnx.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ledger-cleaner <COMMAND> --help");
}
