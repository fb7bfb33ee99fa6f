//! Record file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use crate::TRACING_TARGET_SESSION;

/// A JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct RecordSource {
    path: PathBuf,
}

impl RecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not hold a JSON array.
    pub fn load(&self) -> anyhow::Result<Vec<Value>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read records from {}", self.path.display()))?;

        let records: Vec<Value> = serde_json::from_str(&contents).with_context(|| {
            format!(
                "records file {} must contain a JSON array",
                self.path.display()
            )
        })?;

        tracing::debug!(
            target: TRACING_TARGET_SESSION,
            path = %self.path.display(),
            records = records.len(),
            "records read"
        );

        Ok(records)
    }
}
