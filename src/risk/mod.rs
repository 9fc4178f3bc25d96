use crate::model::VulnerabilityRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score assigned to a flagged vulnerability that carries no usable CVSS
/// data. Strictly positive so a detected vulnerability can never classify
/// as [`Severity::None`].
pub const FALLBACK_SCORE: f64 = 1.0;

/// Receiver for non-fatal diagnostics raised during score extraction.
///
/// Injected rather than global so the fallback-path warning is observable
/// in tests without capturing log output.
pub trait DiagnosticSink {
    /// Called exactly once per vulnerability that lacks scoring data.
    fn missing_score_data(&mut self, vulnerability: &str);
}

/// Production sink: forwards diagnostics to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn missing_score_data(&mut self, vulnerability: &str) {
        log::warn!(
            "no CVSS data for vulnerability {}; assuming a score of {}",
            vulnerability,
            FALLBACK_SCORE
        );
    }
}

/// Severity tier derived from a risk score. Ordering follows risk:
/// `None < Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Classify a non-negative risk score.
    ///
    /// Branch order matters at the boundaries: zero is checked before the
    /// low band, and the high band before falling through to medium, so
    /// scores of exactly 4 and 7 land in medium and high respectively.
    pub fn from_score(score: f64) -> Self {
        debug_assert!(score >= 0.0, "risk scores are non-negative");
        if score == 0.0 {
            Severity::None
        } else if score < 4.0 {
            Severity::Low
        } else if score >= 7.0 {
            Severity::High
        } else {
            Severity::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derive the risk score for one vulnerability.
///
/// The first scheme in priority order with at least one sub-score wins; the
/// score is the larger of its exploitability and impact sub-scores, with a
/// missing sub-score counting as zero. A scheme present but empty falls
/// through to the next one. A vulnerability with no usable scheme at all
/// gets [`FALLBACK_SCORE`] and one warning through the sink.
pub fn score_vulnerability(vuln: &VulnerabilityRecord, sink: &mut dyn DiagnosticSink) -> f64 {
    for source in vuln.score_sources() {
        let metrics = source.metrics();
        if metrics.has_data() {
            return f64::max(
                metrics.exploitability_score.unwrap_or(0.0),
                metrics.impact_score.unwrap_or(0.0),
            );
        }
    }

    sink.missing_score_data(&vuln.name);
    FALLBACK_SCORE
}
