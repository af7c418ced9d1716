use std::io::Write;

use crate::args::OutputFormat;
use crate::driver::RunSummary;
use crate::error::AppResult;

/// Renders the run summary as text lines.
#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let success_rate = summary.success_rate_x100();
    let avg_rps = summary.avg_rps_x100();

    let mut lines = Vec::new();
    lines.push(format!("Total Requests: {}", summary.total));
    lines.push(format!(
        "Successful: {} ({}.{:02}%)",
        summary.succeeded,
        success_rate / 100,
        success_rate % 100
    ));
    lines.push(format!("Failed: {}", summary.failed));
    lines.push(format!("Not Sent: {}", summary.not_sent));
    lines.push(format!("Failure Policy: {}", summary.failure_policy.as_str()));
    lines.push(format!("Elapsed: {}ms", summary.elapsed_ms));
    lines.push(format!("Avg RPS: {}.{:02}", avg_rps / 100, avg_rps % 100));
    if let Some(first_error) = summary.first_error.as_deref() {
        lines.push(format!("First Error: {}", first_error));
    }
    if summary.interrupted {
        lines.push("Interrupted: yes".to_owned());
    }
    lines
}

/// Writes the summary to stdout in the requested format.
///
/// # Errors
///
/// Returns an error when stdout cannot be written or JSON encoding fails.
pub fn print_summary(summary: &RunSummary, format: OutputFormat) -> AppResult<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for line in summary_lines(summary) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, summary)?;
            writeln!(out)?;
        }
        OutputFormat::Quiet => {}
    }
    out.flush()?;
    Ok(())
}
