//! Export service for the pricer.
//!
//! Renders a `PricingReport` snapshot in the requested format and writes it to
//! the configured export directory, or to the user's Documents folder when no
//! directory is configured. The UI only handles presentation of the outcome.

use chrono::{DateTime, Local};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use shared::{PricingReport, ReportError, ReportFormat, REPORT_FILE_STEM};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not determine an export directory")]
    NoExportDirectory,
    #[error("Failed to create export directory {path:?}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Render(#[from] ReportError),
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub file_path: PathBuf,
    pub bytes: usize,
}

/// Export service that writes report files
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    /// Directory configured by the user, before sanitization
    export_dir: Option<String>,
    /// Append `_YYYYMMDD` to file names
    timestamp_filenames: bool,
}

impl ExportService {
    pub fn new(export_dir: Option<String>, timestamp_filenames: bool) -> Self {
        Self {
            export_dir,
            timestamp_filenames,
        }
    }

    /// Render the report and write it to the export directory
    pub fn export(&self, report: &PricingReport, format: ReportFormat) -> Result<ExportOutcome, ExportError> {
        self.export_at(report, format, Local::now())
    }

    fn export_at(
        &self,
        report: &PricingReport,
        format: ReportFormat,
        now: DateTime<Local>,
    ) -> Result<ExportOutcome, ExportError> {
        info!(
            "📄 EXPORT: Exporting {} report in '{}'",
            format.display_name(),
            report.language()
        );

        let contents = report.render(format)?;
        let export_dir = self.resolve_export_dir()?;
        let file_path = export_dir.join(self.file_name(format, now));

        if let Err(source) = fs::create_dir_all(&export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, source);
            return Err(ExportError::CreateDirectory { path: export_dir, source });
        }

        if let Err(source) = fs::write(&file_path, &contents) {
            error!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, source);
            return Err(ExportError::Write { path: file_path, source });
        }

        info!("✅ EXPORT: Wrote {} bytes to {:?}", contents.len(), file_path);
        Ok(ExportOutcome {
            file_path,
            bytes: contents.len(),
        })
    }

    /// File name for the report, optionally stamped with the export date
    fn file_name(&self, format: ReportFormat, now: DateTime<Local>) -> String {
        if self.timestamp_filenames {
            format!("{}_{}.{}", REPORT_FILE_STEM, now.format("%Y%m%d"), format.extension())
        } else {
            format.file_name()
        }
    }

    /// Configured directory if set, otherwise Documents, otherwise home
    fn resolve_export_dir(&self) -> Result<PathBuf, ExportError> {
        if let Some(custom_path) = self.export_dir.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(sanitize_path(custom_path)));
        }

        dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                error!("❌ EXPORT: Could not determine default export directory");
                ExportError::NoExportDirectory
            })
    }
}

/// Basic path sanitization to handle common user input issues
fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim().to_string();

    // Remove surrounding quotes (single or double)
    if cleaned.len() >= 2
        && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
    {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }

    // Escaped spaces
    cleaned = cleaned.replace("\\ ", " ");

    while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
        cleaned.pop();
    }

    if cleaned == "~" || cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
        if let Some(home) = dirs::home_dir() {
            cleaned = if cleaned == "~" {
                home.to_string_lossy().to_string()
            } else {
                home.join(&cleaned[2..]).to_string_lossy().to_string()
            };
        }
    }

    cleaned
}

/// Directory part of an exported file, for display
pub fn display_dir(path: &Path) -> String {
    path.parent()
        .map(|dir| dir.to_string_lossy().to_string())
        .unwrap_or_default()
}
