//! # Export State
//!
//! Selections made in the export panel and the result of the last export.

use std::path::PathBuf;

use shared::ReportFormat;

#[derive(Debug, Default)]
pub struct ExportState {
    /// Format used by the next export
    pub format: ReportFormat,

    /// File written by the most recent successful export
    pub last_export: Option<PathBuf>,
}

impl ExportState {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            last_export: None,
        }
    }
}
