//! Run summary logging.

use std::time::Duration;

use log::info;

use crate::RunReport;

/// Logs a one-line summary of a finished run.
///
/// # Arguments
///
/// * `report` - Counters for the run
/// * `elapsed` - Wall time spent processing input
pub fn log_summary(report: &RunReport, elapsed: Duration) {
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        report.lines_read as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} lines in {:.2} seconds (~{:.2} lines/sec): {} values emitted, {} parse failures, {} duplicates suppressed",
        report.lines_read,
        elapsed_secs,
        rate,
        report.values_emitted,
        report.parse_failures,
        report.duplicates_suppressed
    );
}
