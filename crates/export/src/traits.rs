//! Core trait for the export formatters.

use crate::error::Result;
use catalog::MovieRecord;

/// Core trait for rendering a filtered view to a downloadable artifact.
///
/// Formatters are independent of each other: each reads the view it is given
/// and produces the artifact bytes, nothing else. They are synchronous, hold
/// no state between calls, and may be invoked any number of times.
///
/// ## Design Note
/// - `Send + Sync` allows formatters to be shared across contexts
/// - Rendering returns bytes; writing them anywhere is the caller's side
///   effect, which keeps the formatters pure with respect to the view
pub trait Exporter: Send + Sync {
    /// Returns the name of this formatter (for logging/debugging)
    fn name(&self) -> &str;

    /// Default artifact file name, e.g. `peliculas.csv`
    fn file_name(&self) -> &str;

    /// Render the given view to the artifact bytes.
    ///
    /// An empty view is not special-cased: every formatter still renders
    /// its headers.
    fn render(&self, movies: &[MovieRecord]) -> Result<Vec<u8>>;
}
