//! CLI command implementations for vulngate operations.
//!
//! Each submodule handles one command: loading configuration, reading the
//! scan report, and rendering or gating on the aggregated result. All file
//! I/O lives here; the risk/summary/gate core stays pure.

pub mod gate;
pub mod init;
pub mod report;

pub use gate::{run_gate, GateCommand};
pub use init::init_config;
pub use report::{run_report, ReportCommand};
