//! Clean command implementation
//!
//! The complete cleaning workflow: read the annotated export, run the
//! three-stage sanitizing pipeline in memory, and write the importer-ready
//! CSV. Only the input and the final output ever exist on disk.

use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::services::sanitizer::Sanitizer;
use crate::cli::args::CleanArgs;
use crate::cli::commands::shared::{print_report, setup_logging};
use std::time::Instant;
use tracing::{debug, info};

/// Clean command runner
///
/// 1. Set up logging and validate the configuration
/// 2. Read the input into a materialized document
/// 3. Run the sanitizing pipeline (aborts wholesale on duplicate headers)
/// 4. Write the output and report
pub fn run_clean(args: CleanArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting ledger cleaner");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;

    let document = filesystem::read_document(&config.input_path)?;
    info!(
        "Read {} transaction rows from {}",
        document.transaction_count(),
        config.input_path.display()
    );

    let sanitizer = Sanitizer::new();
    let result = sanitizer.sanitize(document, config.show_progress && !config.dry_run)?;

    if config.dry_run {
        info!("Dry run: discarding sanitized document");
    } else {
        filesystem::write_document(&config.output_path, &result.document)?;
    }

    info!(
        "Cleaning finished in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    print_report(&config, &result.stats, &args.output_format, args.quiet)?;

    Ok(())
}
