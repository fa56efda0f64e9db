//! Process-wide PDF font configuration.
//!
//! The PDF formatter uses one base font family for the whole process.
//! Lifecycle: set at most once, before the first render; never mutated
//! afterwards. If never set, rendering falls back to Helvetica.

use std::sync::OnceLock;

const DEFAULT_FONT: &str = "Helvetica";

static DOCUMENT_FONT: OnceLock<String> = OnceLock::new();

/// Set the base font family used by the PDF formatter.
///
/// Must be one of the standard PDF Type1 families (e.g. "Helvetica",
/// "Times-Roman", "Courier") so the `-Bold` face exists. Returns `false` if
/// the font was already set (the first value stays in effect).
pub fn set_document_font(family: impl Into<String>) -> bool {
    let family = family.into();
    let accepted = DOCUMENT_FONT.set(family.clone()).is_ok();
    if accepted {
        tracing::debug!(%family, "document font configured");
    } else {
        tracing::warn!(
            %family,
            "document font already configured, ignoring new value"
        );
    }
    accepted
}

/// The configured base font family, or the Helvetica default.
pub fn document_font() -> &'static str {
    DOCUMENT_FONT.get().map(String::as_str).unwrap_or(DEFAULT_FONT)
}

/// The bold face of the configured family.
pub fn document_font_bold() -> String {
    format!("{}-Bold", document_font())
}
