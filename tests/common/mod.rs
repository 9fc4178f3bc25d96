use vulngate::{CvssMetrics, DependencyRecord, DiagnosticSink, VulnerabilityRecord};

/// Test sink that records which vulnerabilities lacked scoring data.
#[derive(Default)]
pub struct RecordingSink {
    pub warnings: Vec<String>,
}

impl DiagnosticSink for RecordingSink {
    fn missing_score_data(&mut self, vulnerability: &str) {
        self.warnings.push(vulnerability.to_string());
    }
}

pub fn dependency(file_name: &str, vulns: Vec<VulnerabilityRecord>) -> DependencyRecord {
    DependencyRecord {
        file_name: file_name.to_string(),
        vulnerabilities: vulns,
    }
}

pub fn vulnerability(name: &str, score: f64) -> VulnerabilityRecord {
    VulnerabilityRecord {
        name: name.to_string(),
        cvssv3: Some(CvssMetrics {
            exploitability_score: Some(score),
            impact_score: None,
        }),
        cvssv2: None,
    }
}

pub fn unscored_vulnerability(name: &str) -> VulnerabilityRecord {
    VulnerabilityRecord {
        name: name.to_string(),
        cvssv3: None,
        cvssv2: None,
    }
}
