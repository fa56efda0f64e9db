//! Error types for the export crate.

use thiserror::Error;

/// Errors that can occur while rendering or writing a report artifact.
///
/// Every formatter reports its failure kind so the caller can surface it;
/// export failures are never swallowed.
#[derive(Error, Debug)]
pub enum ExportError {
    /// PDF content could not be encoded or assembled
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Workbook construction or serialization failed
    #[error("spreadsheet rendering failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Delimited-text writing failed
    #[error("CSV rendering failed: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing the artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ExportError>;
