//! Loads the movie catalog from its JSON source.
//!
//! The source is a JSON array of records shaped
//! `{"titulo": string, "genero": string, "lanzamiento": integer}`.
//! The load is a single asynchronous shot: it either delivers the full
//! catalog or fails with a [`LoadError`]. Reloading means calling it again.

use crate::error::{LoadError, Result};
use crate::types::{Catalog, MovieRecord};
use std::path::Path;

/// Load and parse the catalog file, building the unique-value lists.
///
/// # Returns
/// * `Ok(Catalog)` - the full catalog, unique genres/years computed
/// * `Err(LoadError)` - the file is missing, unreadable, or not valid JSON
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            LoadError::Io(e)
        }
    })?;

    let records: Vec<MovieRecord> =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "catalog loaded"
    );

    Ok(Catalog::new(records))
}
