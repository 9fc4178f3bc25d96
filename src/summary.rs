use crate::model::{DependencyRecord, ScanReport};
use crate::risk::{score_vulnerability, DiagnosticSink, Severity};

/// One vulnerability with its derived score, as shown in a summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVulnerability {
    pub name: String,
    pub score: f64,
    pub severity: Severity,
}

/// Resolved status of a single dependency.
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyStatus {
    Clean,
    /// Vulnerabilities ordered highest risk first.
    Flagged(Vec<ScoredVulnerability>),
}

/// One line of the run summary, paired with the dependency it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub file_name: String,
    pub status: DependencyStatus,
}

/// Everything one reporting/gating pass derives from a scan report.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Rows ordered lexically by dependency file name.
    pub rows: Vec<SummaryRow>,
    /// Every vulnerability score in the run, in dependency-then-vulnerability
    /// iteration order.
    pub scores: Vec<f64>,
    /// `max(0, max(scores))`; zero for an empty or clean run.
    pub worst_score: f64,
}

/// Score a dependency's vulnerabilities, preserving their original order.
fn score_dependency(
    dep: &DependencyRecord,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ScoredVulnerability> {
    dep.vulnerabilities
        .iter()
        .map(|v| {
            let score = score_vulnerability(v, sink);
            ScoredVulnerability {
                name: v.name.clone(),
                score,
                severity: Severity::from_score(score),
            }
        })
        .collect()
}

/// Order for display: stable ascending sort by score, then reverse.
///
/// Not equivalent to a descending comparator: equal scores must come out in
/// original-then-reversed order.
fn status_from_scored(mut scored: Vec<ScoredVulnerability>) -> DependencyStatus {
    if scored.is_empty() {
        return DependencyStatus::Clean;
    }
    scored.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.reverse();
    DependencyStatus::Flagged(scored)
}

/// Resolve the status of a single dependency: `Clean` when it has no
/// vulnerabilities, otherwise its scored vulnerabilities highest risk first.
pub fn dependency_status(
    dep: &DependencyRecord,
    sink: &mut dyn DiagnosticSink,
) -> DependencyStatus {
    status_from_scored(score_dependency(dep, sink))
}

/// Aggregate a full scan report into summary rows, the flat score list, and
/// the single worst score.
///
/// Clean dependencies get a row only when `include_clean` is set; they never
/// contribute to the score list either way.
pub fn summarize(
    report: &ScanReport,
    include_clean: bool,
    sink: &mut dyn DiagnosticSink,
) -> RunSummary {
    let mut rows = Vec::new();
    let mut scores = Vec::new();

    for dep in &report.dependencies {
        let scored = score_dependency(dep, sink);
        scores.extend(scored.iter().map(|v| v.score));

        if !dep.is_clean() || include_clean {
            rows.push(SummaryRow {
                file_name: dep.file_name.clone(),
                status: status_from_scored(scored),
            });
        }
    }

    rows.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    let worst_score = scores.iter().copied().fold(0.0_f64, f64::max);

    RunSummary {
        rows,
        scores,
        worst_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CvssMetrics, VulnerabilityRecord};
    use crate::risk::DiagnosticSink;

    #[derive(Default)]
    struct RecordingSink {
        warnings: Vec<String>,
    }

    impl DiagnosticSink for RecordingSink {
        fn missing_score_data(&mut self, vulnerability: &str) {
            self.warnings.push(vulnerability.to_string());
        }
    }

    fn scored_vuln(name: &str, score: f64) -> VulnerabilityRecord {
        VulnerabilityRecord {
            name: name.to_string(),
            cvssv3: Some(CvssMetrics {
                exploitability_score: Some(score),
                impact_score: None,
            }),
            cvssv2: None,
        }
    }

    fn dep(file_name: &str, vulns: Vec<VulnerabilityRecord>) -> DependencyRecord {
        DependencyRecord {
            file_name: file_name.to_string(),
            vulnerabilities: vulns,
        }
    }

    fn flagged_names(status: &DependencyStatus) -> Vec<&str> {
        match status {
            DependencyStatus::Clean => vec![],
            DependencyStatus::Flagged(vulns) => vulns.iter().map(|v| v.name.as_str()).collect(),
        }
    }

    #[test]
    fn test_clean_dependency_status() {
        let mut sink = RecordingSink::default();
        let status = dependency_status(&dep("clean.jar", vec![]), &mut sink);
        assert_eq!(status, DependencyStatus::Clean);
    }

    #[test]
    fn test_flagged_dependency_ordered_by_descending_risk() {
        let mut sink = RecordingSink::default();
        let status = dependency_status(
            &dep(
                "lib.jar",
                vec![scored_vuln("CVE-LOW", 3.0), scored_vuln("CVE-HIGH", 8.0)],
            ),
            &mut sink,
        );
        assert_eq!(flagged_names(&status), vec!["CVE-HIGH", "CVE-LOW"]);
    }

    #[test]
    fn test_equal_scores_keep_reversed_original_order() {
        // Stable ascending sort then reverse: ties come out in reversed
        // input order, which a descending comparator would not produce.
        let mut sink = RecordingSink::default();
        let status = dependency_status(
            &dep(
                "lib.jar",
                vec![
                    scored_vuln("CVE-A", 5.0),
                    scored_vuln("CVE-B", 5.0),
                    scored_vuln("CVE-C", 9.0),
                ],
            ),
            &mut sink,
        );
        assert_eq!(flagged_names(&status), vec!["CVE-C", "CVE-B", "CVE-A"]);
    }

    #[test]
    fn test_summarize_skips_clean_rows_by_default() {
        let mut sink = RecordingSink::default();
        let report = ScanReport {
            dependencies: vec![
                dep("a-clean.jar", vec![]),
                dep("b-flagged.jar", vec![scored_vuln("CVE-1", 5.0)]),
            ],
        };

        let summary = summarize(&report, false, &mut sink);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].file_name, "b-flagged.jar");
        assert_eq!(summary.scores, vec![5.0]);
        assert_eq!(summary.worst_score, 5.0);
    }

    #[test]
    fn test_summarize_includes_clean_rows_when_requested() {
        let mut sink = RecordingSink::default();
        let report = ScanReport {
            dependencies: vec![
                dep("b-flagged.jar", vec![scored_vuln("CVE-1", 5.0)]),
                dep("a-clean.jar", vec![]),
            ],
        };

        let summary = summarize(&report, true, &mut sink);
        let names: Vec<_> = summary.rows.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a-clean.jar", "b-flagged.jar"]);
        assert_eq!(summary.rows[0].status, DependencyStatus::Clean);
    }

    #[test]
    fn test_rows_sorted_lexically_by_file_name() {
        let mut sink = RecordingSink::default();
        let report = ScanReport {
            dependencies: vec![
                dep("zlib.jar", vec![scored_vuln("CVE-1", 2.0)]),
                dep("alpha.jar", vec![scored_vuln("CVE-2", 3.0)]),
                dep("mid.jar", vec![scored_vuln("CVE-3", 1.0)]),
            ],
        };

        let summary = summarize(&report, false, &mut sink);
        let names: Vec<_> = summary.rows.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["alpha.jar", "mid.jar", "zlib.jar"]);
    }

    #[test]
    fn test_flat_scores_keep_iteration_order() {
        // The flat list follows dependency-then-vulnerability input order,
        // not the per-row display order.
        let mut sink = RecordingSink::default();
        let report = ScanReport {
            dependencies: vec![
                dep(
                    "z.jar",
                    vec![scored_vuln("CVE-1", 2.0), scored_vuln("CVE-2", 9.0)],
                ),
                dep("a.jar", vec![scored_vuln("CVE-3", 4.0)]),
            ],
        };

        let summary = summarize(&report, false, &mut sink);
        assert_eq!(summary.scores, vec![2.0, 9.0, 4.0]);
        assert_eq!(summary.worst_score, 9.0);
    }

    #[test]
    fn test_empty_run_has_zero_worst_score() {
        let mut sink = RecordingSink::default();
        let summary = summarize(&ScanReport::default(), false, &mut sink);
        assert!(summary.rows.is_empty());
        assert!(summary.scores.is_empty());
        assert_eq!(summary.worst_score, 0.0);
    }

    #[test]
    fn test_clean_run_has_zero_worst_score() {
        let mut sink = RecordingSink::default();
        let report = ScanReport {
            dependencies: vec![dep("a.jar", vec![]), dep("b.jar", vec![])],
        };

        let summary = summarize(&report, true, &mut sink);
        assert_eq!(summary.rows.len(), 2);
        assert!(summary.scores.is_empty());
        assert_eq!(summary.worst_score, 0.0);
    }

    #[test]
    fn test_unscored_vulnerability_diagnosed_once_per_pass() {
        let mut sink = RecordingSink::default();
        let unscored = VulnerabilityRecord {
            name: "CVE-NO-DATA".to_string(),
            cvssv3: None,
            cvssv2: None,
        };
        let report = ScanReport {
            dependencies: vec![dep("a.jar", vec![unscored])],
        };

        let summary = summarize(&report, false, &mut sink);
        assert_eq!(summary.worst_score, crate::risk::FALLBACK_SCORE);
        assert_eq!(sink.warnings, vec!["CVE-NO-DATA".to_string()]);
    }
}
