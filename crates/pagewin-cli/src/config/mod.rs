//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── records: PathBuf            # JSON array of records to paginate
//! └── window: PageWindowConfig    # Page size and picker visibility
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! pagewin --records accounts.json --page-size 10
//!
//! # Or via environment variables
//! PAGEWIN_RECORDS=accounts.json PAGEWIN_PAGE_SIZE=10 pagewin
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use pagewin_core::PageWindowConfig;
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "pagewin")]
#[command(about = "Page through a JSON record file one window at a time")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON file holding an array of records.
    ///
    /// The file is read again on `reload`.
    #[arg(long, short = 'r', env = "PAGEWIN_RECORDS")]
    pub records: PathBuf,

    /// Page window configuration.
    #[clap(flatten)]
    pub window: PageWindowConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.window
            .validate()
            .context("invalid page window configuration")?;
        Ok(())
    }

    /// Logs configuration.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            records = %self.records.display(),
            page_size = self.window.page_size,
            page_size_hidden = self.window.page_size_hidden,
            "Page window configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_and_page_size() {
        let cli = Cli::try_parse_from(["pagewin", "--records", "rows.json", "--page-size", "10"])
            .expect("valid arguments");

        assert_eq!(cli.records, PathBuf::from("rows.json"));
        assert_eq!(cli.window.page_size, 10);
        assert!(!cli.window.page_size_hidden);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn page_size_defaults_to_five() {
        let cli = Cli::try_parse_from(["pagewin", "-r", "rows.json", "--page-size-hidden"])
            .expect("valid arguments");

        assert_eq!(cli.window.page_size, PageWindowConfig::DEFAULT_PAGE_SIZE);
        assert!(cli.window.page_size_hidden);
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let cli = Cli::try_parse_from(["pagewin", "-r", "rows.json", "--page-size", "0"])
            .expect("valid arguments");

        assert!(cli.validate().is_err());
    }

    #[test]
    fn records_path_is_required() {
        assert!(Cli::try_parse_from(["pagewin"]).is_err());
    }
}
