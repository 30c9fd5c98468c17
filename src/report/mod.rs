mod format;
mod humanize;

pub use format::{RULE_WIDTH, write_report};
pub use humanize::group_thousands;

use std::io::{BufWriter, Write};

use tracing::debug;

use crate::error::ReportError;
use crate::types::Report;

/// Print the built-in report to stdout.
///
/// # Errors
/// Returns [`ReportError::Io`] when stdout cannot be written, for example on a
/// closed pipe. Output is truncated at the failing write.
pub fn run() -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_report(&mut out, &Report::default())
}

/// Write `report` as text to `out` and flush it.
///
/// # Errors
/// Returns the first write or flush error.
pub fn print_report<W: Write>(out: &mut W, report: &Report) -> Result<(), ReportError> {
    write_report(out, report)?;
    out.flush()?;
    debug!(project = %report.stats.project, "text report written");
    Ok(())
}
