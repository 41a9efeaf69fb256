//! Command-line argument parsing
//!
//! Supports:
//! - Opening a CSV file at startup
//! - Overriding the rows-per-page preference
//! - Overriding the export path

use clap::Parser;
use std::path::PathBuf;

use crate::model::PAGE_SIZES;

/// A terminal CSV editor
#[derive(Parser, Debug)]
#[command(name = "csved", version, about = "A terminal CSV editor")]
pub struct CliArgs {
    /// CSV file to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Rows per page (10, 20, 30, 40 or 50)
    #[arg(short = 'p', long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Where `save` writes the result (default: edited_data.csv)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File to open at startup, if any
    pub file: Option<PathBuf>,
    /// Validated rows-per-page override
    pub page_size: Option<usize>,
    /// Export path override
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(n) = self.page_size {
            if !PAGE_SIZES.contains(&n) {
                return Err(format!(
                    "page size must be one of 10, 20, 30, 40 or 50 (got {})",
                    n
                ));
            }
        }

        Ok(StartupConfig {
            file: self.file,
            page_size: self.page_size,
            output: self.output,
        })
    }
}
