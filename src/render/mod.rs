// src/render/mod.rs
// =============================================================================
// This module prints results.
//
// Submodules:
// - table: summary and detail tables for people
// - json: JSON report and raw response for scripts
//
// Every writer takes `&mut impl Write` instead of printing directly, so tests
// can render into a Vec<u8>.
// =============================================================================

mod json;
mod table;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputMode;
use crate::contributions::Contribution;

pub use json::write_raw;

/// The views that are built from extracted contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Summary,
    Detail,
    Json,
}

impl ReportStyle {
    /// `None` for raw output, which is printed without extraction.
    pub fn for_mode(mode: OutputMode) -> Option<Self> {
        match mode {
            OutputMode::Table => Some(ReportStyle::Summary),
            OutputMode::Detail => Some(ReportStyle::Detail),
            OutputMode::Json => Some(ReportStyle::Json),
            OutputMode::Raw => None,
        }
    }
}

/// Prints extracted contributions in the requested style.
pub fn write_contributions<W: Write>(
    out: &mut W,
    style: ReportStyle,
    username: &str,
    contributions: &[Contribution],
) -> Result<()> {
    match style {
        ReportStyle::Summary => table::write_summary(out, username, contributions),
        ReportStyle::Detail => table::write_detail(out, username, contributions),
        ReportStyle::Json => json::write_json(out, contributions),
    }
}
