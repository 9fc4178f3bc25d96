// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod gate;
pub mod model;
pub mod risk;
pub mod summary;

// Re-export commonly used types
pub use crate::config::{Config, GateConfig, SummaryConfig};
pub use crate::errors::VulngateError;
pub use crate::formatting::{ColorMode, ColorTag, FormattingConfig, StatusFormatter};
pub use crate::gate::{gate, GateVerdict};
pub use crate::model::{
    CvssMetrics, DependencyRecord, ScanReport, ScoreSource, VulnerabilityRecord,
};
pub use crate::risk::{score_vulnerability, DiagnosticSink, LogSink, Severity, FALLBACK_SCORE};
pub use crate::summary::{
    dependency_status, summarize, DependencyStatus, RunSummary, ScoredVulnerability, SummaryRow,
};
