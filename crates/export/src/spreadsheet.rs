//! Spreadsheet (Office Open XML) formatter.
//!
//! Renders the filtered view as a single-sheet workbook named "Peliculas".
//! Column headers are the raw JSON field names (`titulo`, `genero`,
//! `lanzamiento`), not the display labels the PDF and CSV reports use.
//! The year is written as a number cell.

use crate::error::Result;
use crate::traits::Exporter;
use catalog::MovieRecord;
use rust_xlsxwriter::Workbook;

const SHEET_NAME: &str = "Peliculas";
const COLUMN_HEADERS: [&str; 3] = ["titulo", "genero", "lanzamiento"];

/// Renders the filtered view as an xlsx workbook.
pub struct SpreadsheetExporter;

impl Exporter for SpreadsheetExporter {
    fn name(&self) -> &str {
        "SpreadsheetExporter"
    }

    fn file_name(&self) -> &str {
        "peliculas.xlsx"
    }

    fn render(&self, movies: &[MovieRecord]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (column, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet.write_string(0, column as u16, *header)?;
        }

        for (row, movie) in movies.iter().enumerate() {
            let row = row as u32 + 1;
            worksheet.write_string(row, 0, movie.title.as_str())?;
            worksheet.write_string(row, 1, movie.genre.as_str())?;
            worksheet.write_number(row, 2, f64::from(movie.release_year))?;
        }

        let buffer = workbook.save_to_buffer()?;

        tracing::debug!(rows = movies.len(), bytes = buffer.len(), "workbook rendered");
        Ok(buffer)
    }
}
