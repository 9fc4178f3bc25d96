use super::report::{formatting_config, load_scan_report};
use crate::config::Config;
use crate::formatting::StatusFormatter;
use crate::gate::gate;
use crate::risk::LogSink;
use crate::summary::summarize;
use anyhow::Result;
use std::path::PathBuf;

pub struct GateCommand {
    pub scan_report: PathBuf,
    pub config: Option<PathBuf>,
    pub fail_threshold: Option<f64>,
    pub verbose_summary: bool,
    pub plain: bool,
}

pub fn run_gate(cmd: GateCommand) -> Result<()> {
    let mut config = Config::load(cmd.config.as_deref())?;
    if let Some(threshold) = cmd.fail_threshold {
        config.gate.fail_threshold = threshold;
        // A threshold from the command line gets the same range check as one
        // from the file.
        config.validate()?;
    }

    let include_clean = cmd.verbose_summary || config.summary.verbose;
    let report = load_scan_report(&cmd.scan_report)?;

    let mut sink = LogSink;
    let summary = summarize(&report, include_clean, &mut sink);

    let formatter = StatusFormatter::new(formatting_config(cmd.plain));
    println!("{}", formatter.render_summary(&summary));
    println!();

    let verdict = gate(summary.worst_score, config.gate.fail_threshold);
    if verdict.failed {
        println!(
            "[ERROR] Gate FAILED - worst vulnerability score {} exceeds threshold {}",
            verdict.worst_score, config.gate.fail_threshold
        );
        anyhow::bail!("Gate failed")
    }

    println!(
        "[OK] Gate PASSED - worst vulnerability score {} (threshold: {})",
        verdict.worst_score, config.gate.fail_threshold
    );
    Ok(())
}
