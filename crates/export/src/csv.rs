//! Delimited-text (CSV) formatter.
//!
//! Renders the filtered view as UTF-8 CSV with the fixed header line
//! `Título,Género,Año de lanzamiento` and one row per record in view order.
//! Fields containing the delimiter, quotes, or line breaks are RFC-4180
//! quoted; plain fields are written as-is.

use crate::error::Result;
use crate::traits::Exporter;
use catalog::MovieRecord;

/// Fixed header line of the CSV report.
pub const CSV_HEADERS: [&str; 3] = ["Título", "Género", "Año de lanzamiento"];

/// Renders the filtered view as delimited text.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        "CsvExporter"
    }

    fn file_name(&self) -> &str {
        "peliculas.csv"
    }

    fn render(&self, movies: &[MovieRecord]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record(CSV_HEADERS)?;
            for movie in movies {
                writer.write_record([
                    movie.title.as_str(),
                    movie.genre.as_str(),
                    movie.release_year.to_string().as_str(),
                ])?;
            }
            writer.flush()?;
        }

        tracing::debug!(rows = movies.len(), bytes = buffer.len(), "CSV rendered");
        Ok(buffer)
    }
}
