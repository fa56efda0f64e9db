//! Tabular-document (PDF) formatter.
//!
//! Renders the filtered view as a styled A4 table: an 18pt bold title,
//! a three-column header row (Título / Género / Año de lanzamiento) on a
//! blue fill with white bold text, and one light-gray body row per record.
//! The header row repeats on every page; long views paginate. An empty view
//! still renders the title and header row.
//!
//! Text is written with the standard Type1 fonts (see [`crate::fonts`]) and
//! WinAnsi encoding so the accented Spanish headers come out correctly.

use crate::error::Result;
use crate::fonts;
use crate::traits::Exporter;
use catalog::MovieRecord;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

const TITLE_TEXT: &str = "Informe de Películas";
const TITLE_SIZE: f32 = 18.0;
const HEADER_SIZE: f32 = 11.0;
const CELL_SIZE: f32 = 10.0;
const ROW_HEIGHT: f32 = 22.0;
const CELL_PADDING: f32 = 6.0;
const BASELINE_OFFSET: f32 = 7.0;

const TABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const COLUMN_WIDTH: f32 = TABLE_WIDTH / 3.0;

const HEADER_LABELS: [&str; 3] = ["Título", "Género", "Año de lanzamiento"];

// Styling fixed by the report design: #337ab7 header fill, white header
// text, #f5f5f5 body fill.
const HEADER_FILL: [f32; 3] = [0.2, 0.478, 0.718];
const HEADER_TEXT: [f32; 3] = [1.0, 1.0, 1.0];
const ROW_FILL: [f32; 3] = [0.961, 0.961, 0.961];
const ROW_TEXT: [f32; 3] = [0.0, 0.0, 0.0];

/// Renders the filtered view as a styled tabular PDF document.
pub struct PdfExporter;

impl Exporter for PdfExporter {
    fn name(&self) -> &str {
        "PdfExporter"
    }

    fn file_name(&self) -> &str {
        "peliculas.pdf"
    }

    fn render(&self, movies: &[MovieRecord]) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => fonts::document_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(fonts::document_font_bold().into_bytes()),
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        // Split the view into pages. The first page loses some height to
        // the title; every page carries its own header row.
        let mut page_ids: Vec<Object> = Vec::new();
        let mut remaining = movies;
        let mut first_page = true;

        loop {
            let table_top = if first_page {
                PAGE_HEIGHT - MARGIN - TITLE_SIZE - 24.0
            } else {
                PAGE_HEIGHT - MARGIN
            };
            let row_capacity = ((table_top - MARGIN) / ROW_HEIGHT) as usize;
            let data_capacity = row_capacity.saturating_sub(1);

            let take = remaining.len().min(data_capacity);
            let (rows, rest) = remaining.split_at(take);

            let operations = build_page(first_page, table_top, rows);
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id.into());

            remaining = rest;
            first_page = false;
            if remaining.is_empty() {
                break;
            }
        }

        let page_count = page_ids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;

        tracing::debug!(
            rows = movies.len(),
            pages = page_count,
            bytes = buffer.len(),
            "PDF rendered"
        );
        Ok(buffer)
    }
}

/// Build the content operations of one page: optional title, header row,
/// then the body rows for this page.
fn build_page(with_title: bool, table_top: f32, rows: &[MovieRecord]) -> Vec<Operation> {
    let mut ops = Vec::new();

    if with_title {
        draw_text(
            &mut ops,
            "F2",
            TITLE_SIZE,
            ROW_TEXT,
            MARGIN,
            PAGE_HEIGHT - MARGIN - TITLE_SIZE,
            TITLE_TEXT,
        );
    }

    // Header row
    let header_y = table_top - ROW_HEIGHT;
    fill_rect(&mut ops, HEADER_FILL, MARGIN, header_y, TABLE_WIDTH, ROW_HEIGHT);
    for (column, label) in HEADER_LABELS.iter().enumerate() {
        draw_text(
            &mut ops,
            "F2",
            HEADER_SIZE,
            HEADER_TEXT,
            cell_x(column),
            header_y + BASELINE_OFFSET,
            label,
        );
    }

    // Body rows
    for (row, movie) in rows.iter().enumerate() {
        let row_y = table_top - ROW_HEIGHT * (row as f32 + 2.0);
        fill_rect(&mut ops, ROW_FILL, MARGIN, row_y, TABLE_WIDTH, ROW_HEIGHT);

        let year = movie.release_year.to_string();
        let cells = [movie.title.as_str(), movie.genre.as_str(), year.as_str()];
        for (column, text) in cells.iter().enumerate() {
            draw_text(
                &mut ops,
                "F1",
                CELL_SIZE,
                ROW_TEXT,
                cell_x(column),
                row_y + BASELINE_OFFSET,
                text,
            );
        }
    }

    ops
}

fn cell_x(column: usize) -> f32 {
    MARGIN + COLUMN_WIDTH * column as f32 + CELL_PADDING
}

fn fill_rect(ops: &mut Vec<Operation>, color: [f32; 3], x: f32, y: f32, w: f32, h: f32) {
    ops.push(Operation::new(
        "rg",
        vec![color[0].into(), color[1].into(), color[2].into()],
    ));
    ops.push(Operation::new(
        "re",
        vec![x.into(), y.into(), w.into(), h.into()],
    ));
    ops.push(Operation::new("f", vec![]));
}

fn draw_text(
    ops: &mut Vec<Operation>,
    font: &str,
    size: f32,
    color: [f32; 3],
    x: f32,
    y: f32,
    text: &str,
) {
    ops.push(Operation::new(
        "rg",
        vec![color[0].into(), color[1].into(), color[2].into()],
    ));
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(encode_win_ansi(text))],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Encode text for the WinAnsi-encoded Type1 fonts. Code points up to
/// U+00FF map straight to their byte; anything outside becomes '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_win_ansi_keeps_latin1() {
        assert_eq!(encode_win_ansi("Título"), b"T\xEDtulo");
        assert_eq!(encode_win_ansi("Año"), b"A\xF1o");
        assert_eq!(encode_win_ansi("A\u{30C4}B"), b"A?B");
    }

    #[test]
    fn test_page_operations_include_header_fill() {
        let ops = build_page(true, 760.0, &[]);

        // Title + header row, no body rows.
        let rects = ops.iter().filter(|op| op.operator == "re").count();
        assert_eq!(rects, 1);
        let texts = ops.iter().filter(|op| op.operator == "Tj").count();
        assert_eq!(texts, 1 + HEADER_LABELS.len());
    }
}
