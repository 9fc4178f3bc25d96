use crate::risk::Severity;
use crate::summary::{DependencyStatus, RunSummary};
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors, no bold)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Display color for a severity tier. Closed table; every tier maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Green,
    Cyan,
    Yellow,
    Red,
}

impl ColorTag {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::None => ColorTag::Green,
            Severity::Low => ColorTag::Cyan,
            Severity::Medium => ColorTag::Yellow,
            Severity::High => ColorTag::Red,
        }
    }
}

/// Applies terminal styling to the pure (text, severity) output of the
/// summary layer. The aggregation core never touches ANSI codes.
pub struct StatusFormatter {
    config: FormattingConfig,
}

impl StatusFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        } else {
            colored::control::set_override(false);
        }

        Self { config }
    }

    pub fn bold_colored(&self, text: &str, tag: ColorTag) -> String {
        if !self.config.color.should_use_color() {
            return text.to_string();
        }
        let styled = match tag {
            ColorTag::Green => text.green(),
            ColorTag::Cyan => text.cyan(),
            ColorTag::Yellow => text.yellow(),
            ColorTag::Red => text.red(),
        };
        styled.bold().to_string()
    }

    fn header(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.bright_white().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render one dependency status: a bold green "OK" for a clean
    /// dependency, otherwise the flagged vulnerability names highest risk
    /// first, each bold in its severity color, joined with ", ".
    pub fn render_status(&self, status: &DependencyStatus) -> String {
        match status {
            DependencyStatus::Clean => self.bold_colored("OK", ColorTag::Green),
            DependencyStatus::Flagged(vulns) => vulns
                .iter()
                .map(|v| self.bold_colored(&v.name, ColorTag::for_severity(v.severity)))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Render the full summary block: header, aligned rows, worst-score
    /// footer.
    pub fn render_summary(&self, summary: &RunSummary) -> String {
        let mut lines = vec![self.header("Dependency vulnerability summary")];

        if summary.rows.is_empty() {
            lines.push("  (no flagged dependencies)".to_string());
        } else {
            let width = summary
                .rows
                .iter()
                .map(|r| r.file_name.len())
                .max()
                .unwrap_or(0);
            for row in &summary.rows {
                lines.push(format!(
                    "  {:<width$}  {}",
                    row.file_name,
                    self.render_status(&row.status),
                    width = width
                ));
            }
        }

        let severity = Severity::from_score(summary.worst_score);
        lines.push(String::new());
        lines.push(format!(
            "Highest vulnerability score: {} ({})",
            summary.worst_score,
            self.bold_colored(severity.as_str(), ColorTag::for_severity(severity)),
        ));

        lines.join("\n")
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
