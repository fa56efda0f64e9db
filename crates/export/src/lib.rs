//! # Export Crate
//!
//! Renders a filtered movie view to downloadable report artifacts.
//!
//! ## Main Components
//!
//! - **traits**: The `Exporter` trait all formatters implement
//! - **pdf**: Styled tabular document (lopdf)
//! - **spreadsheet**: Single-sheet xlsx workbook (rust_xlsxwriter)
//! - **csv**: Delimited text with RFC-4180 quoting (csv)
//! - **fonts**: Process-wide PDF font configuration
//! - **error**: Error types for rendering and writing
//!
//! Formatters are independent and stateless: each consumes the view it is
//! given and produces bytes. Writing those bytes to disk is the only side
//! effect, done through [`write_to_file`].

// Public modules
pub mod csv;
pub mod error;
pub mod fonts;
pub mod pdf;
pub mod spreadsheet;
pub mod traits;

// Re-export main types
pub use self::csv::CsvExporter;
pub use error::{ExportError, Result};
pub use pdf::PdfExporter;
pub use spreadsheet::SpreadsheetExporter;
pub use traits::Exporter;

use catalog::MovieRecord;
use std::path::Path;

/// Render the view with the given formatter and write the artifact to disk.
///
/// # Returns
/// * `Ok(usize)` - number of bytes written
/// * `Err(ExportError)` - rendering or writing failed
pub fn write_to_file(
    exporter: &dyn Exporter,
    movies: &[MovieRecord],
    path: &Path,
) -> Result<usize> {
    let bytes = exporter.render(movies)?;
    std::fs::write(path, &bytes)?;

    tracing::info!(
        exporter = exporter.name(),
        path = %path.display(),
        bytes = bytes.len(),
        "report written"
    );
    Ok(bytes.len())
}
