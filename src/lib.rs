#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod config;
mod data;
mod error;
mod types;
pub mod output;
pub mod report;

pub use config::{check_consistency, load_config};
pub use data::{DOCUMENTATION_INDEX, NEXT_STEPS, WORKFLOWS};
pub use error::ReportError;
pub use report::{print_report, run, write_report};
pub use types::{
    Additions, Codebase, CommandsRecord, DocCommands, DocEntry, Documentation, E2eCoverage,
    Report, Role, RunCommands, Security, SetupCommands, StatsRecord, Testing, Valuation,
    Workflow,
};
