use crate::config::Config;
use crate::errors::VulngateError;
use crate::formatting::{FormattingConfig, StatusFormatter};
use crate::model::ScanReport;
use crate::risk::LogSink;
use crate::summary::summarize;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ReportCommand {
    pub scan_report: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose_summary: bool,
    pub plain: bool,
}

pub fn run_report(cmd: ReportCommand) -> Result<()> {
    let config = Config::load(cmd.config.as_deref())?;
    let include_clean = cmd.verbose_summary || config.summary.verbose;
    let report = load_scan_report(&cmd.scan_report)?;

    let mut sink = LogSink;
    let summary = summarize(&report, include_clean, &mut sink);

    let formatter = StatusFormatter::new(formatting_config(cmd.plain));
    write_output(&formatter.render_summary(&summary), cmd.output)
}

pub(crate) fn load_scan_report(path: &Path) -> Result<ScanReport, VulngateError> {
    let raw = fs::read_to_string(path).map_err(|source| VulngateError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| VulngateError::ReportParse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn write_output(rendered: &str, output_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = fs::File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        file.write_all(b"\n")?;
    } else {
        println!("{rendered}");
    }
    Ok(())
}
