//! Export of analysis results to spreadsheet and CSV files.
//!
//! Both formats are written from the same [`ReportRow`]s the results table shows.
//! Exporting before any analysis has succeeded is a no-op.

use std::path::PathBuf;

use crate::analysis::ResultSet;
use crate::config::ExportConfig;
use crate::constants::{CSV_MIME_TYPE, XLSX_MIME_TYPE};
use crate::report::report_rows;

pub mod csv_export;
pub mod xlsx_export;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => XLSX_MIME_TYPE,
            ExportFormat::Csv => CSV_MIME_TYPE,
        }
    }
}

/// A file produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub rows: usize,
}

impl ExportedFile {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Writes exports into a fixed directory under fixed file names.
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
    xlsx_file_name: String,
    csv_file_name: String,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>, xlsx_file_name: impl Into<String>, csv_file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            xlsx_file_name: xlsx_file_name.into(),
            csv_file_name: csv_file_name.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.directory, &config.xlsx_file_name, &config.csv_file_name)
    }

    pub fn path_for(&self, format: ExportFormat) -> PathBuf {
        match format {
            ExportFormat::Xlsx => self.directory.join(&self.xlsx_file_name),
            ExportFormat::Csv => self.directory.join(&self.csv_file_name),
        }
    }

    /// Export `results` in `format`, overwriting any previous export.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `results` is `None`.
    pub fn export(&self, format: ExportFormat, results: Option<&ResultSet>) -> Result<Option<ExportedFile>, ExportError> {
        let Some(results) = results else {
            return Ok(None);
        };

        std::fs::create_dir_all(&self.directory)?;

        let rows = report_rows(results);
        let path = self.path_for(format);
        match format {
            ExportFormat::Xlsx => xlsx_export::write_workbook(&rows, &path)?,
            ExportFormat::Csv => csv_export::write_csv(&rows, &path)?,
        }

        Ok(Some(ExportedFile {
            format,
            path,
            rows: rows.len(),
        }))
    }
}
