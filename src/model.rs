use serde::{Deserialize, Serialize};

/// Sub-scores for one CVSS scheme, as reported by the external scan engine.
///
/// A missing sub-score means "not provided" and is distinct from an explicit
/// zero; the distinction matters for the fallback-score policy in
/// [`crate::risk::score_vulnerability`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssMetrics {
    #[serde(default)]
    pub exploitability_score: Option<f64>,
    #[serde(default)]
    pub impact_score: Option<f64>,
}

impl CvssMetrics {
    /// True when the scheme carries at least one usable sub-score.
    pub fn has_data(&self) -> bool {
        self.exploitability_score.is_some() || self.impact_score.is_some()
    }
}

/// One scoring scheme attached to a vulnerability, tagged by CVSS major version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreSource {
    CvssV3(CvssMetrics),
    CvssV2(CvssMetrics),
}

impl ScoreSource {
    pub fn metrics(&self) -> &CvssMetrics {
        match self {
            ScoreSource::CvssV3(m) | ScoreSource::CvssV2(m) => m,
        }
    }
}

/// A vulnerability flagged by the scanner, immutable once deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityRecord {
    pub name: String,
    #[serde(default)]
    pub cvssv3: Option<CvssMetrics>,
    #[serde(default)]
    pub cvssv2: Option<CvssMetrics>,
}

impl VulnerabilityRecord {
    /// Scoring schemes in extraction priority order: CVSS v3 first, CVSS v2
    /// only as a fallback. At most one scheme is ever used per record.
    pub fn score_sources(&self) -> impl Iterator<Item = ScoreSource> + '_ {
        self.cvssv3
            .map(ScoreSource::CvssV3)
            .into_iter()
            .chain(self.cvssv2.map(ScoreSource::CvssV2))
    }
}

/// A scanned dependency and the vulnerabilities attributed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub file_name: String,
    #[serde(default)]
    pub vulnerabilities: Vec<VulnerabilityRecord>,
}

impl DependencyRecord {
    pub fn is_clean(&self) -> bool {
        self.vulnerabilities.is_empty()
    }
}

/// The full result set of one scan engine run. The aggregation pass treats
/// this as an immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(default)]
    pub dependencies: Vec<DependencyRecord>,
}
