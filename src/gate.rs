/// Outcome of comparing a run's worst score against the fail threshold.
///
/// Always carries the worst score so callers can log non-failing but
/// nonzero risk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateVerdict {
    pub failed: bool,
    pub worst_score: f64,
}

/// Compare the worst observed score against the configured threshold.
///
/// Strictly greater: a run whose worst score equals the threshold passes.
/// Threshold validation happens at configuration load, before this runs.
pub fn gate(worst_score: f64, fail_threshold: f64) -> GateVerdict {
    GateVerdict {
        failed: worst_score > fail_threshold,
        worst_score,
    }
}
