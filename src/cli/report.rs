//! End-of-run summary rendering.
//!
//! Counts first, then a capped list of per-file reasons; the full list is
//! already in the log at warn level by the time this runs.

use std::fmt::Write as _;

use crate::batch::BatchReport;

/// Failure lines shown in the summary; the rest is only in the log.
const MAX_SHOWN_FAILURES: usize = 5;

/// Render the batch summary.
pub fn render_summary(report: &BatchReport) -> String {
    let mut out = String::new();

    if report.attempted == 0 {
        let _ = writeln!(out, "no files processed");
        return out;
    }

    if report.succeeded > 0 {
        let _ = writeln!(
            out,
            "successfully processed {} file{}",
            report.succeeded,
            plural(report.succeeded)
        );
    }

    if !report.failures.is_empty() {
        let _ = writeln!(
            out,
            "failed to process {} file{}:",
            report.failed(),
            plural(report.failed())
        );
        for (idx, (path, reason)) in report.failures.iter().take(MAX_SHOWN_FAILURES).enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let _ = writeln!(out, "  {}. {}: {}", idx + 1, name, reason);
        }
        let hidden = report.failed().saturating_sub(MAX_SHOWN_FAILURES);
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {hidden} more (run with -v for details)");
        }
    }

    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
