use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vulngate")]
#[command(about = "Vulnerability risk summary and build gate for dependency scan reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a risk summary of a scan report
    Report {
        /// Path to the scan report (JSON)
        scan_report: PathBuf,

        /// Configuration file (defaults to .vulngate.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include clean dependencies in the summary
        #[arg(long = "verbose-summary")]
        verbose_summary: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Print the summary, then fail when the worst score exceeds the threshold
    Gate {
        /// Path to the scan report (JSON)
        scan_report: PathBuf,

        /// Configuration file (defaults to .vulngate.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Worst score above which the build fails (overrides the config file)
        #[arg(long = "fail-threshold", allow_negative_numbers = true)]
        fail_threshold: Option<f64>,

        /// Include clean dependencies in the summary
        #[arg(long = "verbose-summary")]
        verbose_summary: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Create a default .vulngate.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
