//! Renders the success-path stdout output: banner, mode echo, separators,
//! and the summary section. Rendering is string-based so the exact shape is
//! testable without capturing stdout.

use std::fmt::Write;

use keycount_core::SummaryLine;

use crate::cli::Mode;

pub const BANNER: &str = "============== KEYWORD COUNTER ==============";
const RULE: &str = "---------------------------------------------";
const CLOSING: &str = "=============================================";

/// Everything printed before the scan starts.
pub fn render_header(mode: &Mode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Mode: {}", mode.flag_value());
    if let Mode::File(path) = mode {
        let _ = writeln!(out, "Filepath: {}", path.display());
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Everything printed after the scan completes. Zero-count keywords were
/// already dropped by `summarize`; an empty scan still gets its section.
pub fn render_summary(lines: &[SummaryLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\nSummary:");
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "{CLOSING}");
    out
}
