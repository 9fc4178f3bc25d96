//! Error types for vulngate operations.
//!
//! The library surfaces structured errors; the command layer converts them
//! into `anyhow` context at the process boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VulngateError {
    /// Malformed or out-of-range configuration. Never silently clamped.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The scan report file could not be read.
    #[error("failed to read scan report {path}")]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan report file was not valid scanner JSON.
    #[error("failed to parse scan report {path}")]
    ReportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
