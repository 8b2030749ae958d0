//! Run configuration for the ledger cleaner
//!
//! A small settings structure assembled from CLI arguments. The pipeline
//! itself is configuration-free; this only governs where files are read and
//! written and how the run reports itself.

use crate::constants::DEFAULT_OUTPUT_SUFFIX;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one cleaning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the hand-annotated input CSV
    pub input_path: PathBuf,

    /// Path the sanitized CSV is written to
    pub output_path: PathBuf,

    /// Overwrite an existing output file instead of refusing
    pub force_overwrite: bool,

    /// Report what would happen without writing any output
    pub dry_run: bool,

    /// Show per-stage progress bars
    pub show_progress: bool,
}

impl Config {
    /// Create a configuration for an input file with defaults
    ///
    /// The default output path is the input path with `-cleaned` appended to
    /// the file stem: `DigiTrnx.csv` becomes `DigiTrnx-cleaned.csv` next to
    /// the original.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = Self::default_output_path(&input_path);

        Self {
            input_path,
            output_path,
            force_overwrite: false,
            dry_run: false,
            show_progress: true,
        }
    }

    /// Set an explicit output path
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Allow overwriting an existing output file
    pub fn with_force_overwrite(mut self, force: bool) -> Self {
        self.force_overwrite = force;
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable progress bars
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Validate the configuration against the filesystem
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if !self.dry_run && !self.force_overwrite && self.output_path.exists() {
            return Err(Error::configuration(format!(
                "Output file already exists (use --force to overwrite): {}",
                self.output_path.display()
            )));
        }

        Ok(())
    }

    /// Compute the default output path for an input file
    pub fn default_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("input");
        let extension = input_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("csv");

        input_path.with_file_name(format!("{}{}.{}", stem, DEFAULT_OUTPUT_SUFFIX, extension))
    }
}
