use anyhow::Result;
use clap::Parser;
use vulngate::cli::{Cli, Commands};
use vulngate::commands::{self, GateCommand, ReportCommand};

fn main() -> Result<()> {
    // Missing-score diagnostics are emitted at warn level; surface them by
    // default without requiring RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            scan_report,
            config,
            output,
            verbose_summary,
            plain,
        } => commands::run_report(ReportCommand {
            scan_report,
            config,
            output,
            verbose_summary,
            plain,
        }),
        Commands::Gate {
            scan_report,
            config,
            fail_threshold,
            verbose_summary,
            plain,
        } => commands::run_gate(GateCommand {
            scan_report,
            config,
            fail_threshold,
            verbose_summary,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
