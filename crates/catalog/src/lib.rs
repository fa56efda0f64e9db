//! # Catalog Crate
//!
//! This crate handles loading and querying the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog, FilterCriteria)
//! - **loader**: Async single-shot load of the JSON source
//! - **filter**: The pure filter engine producing the filtered view
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_catalog, FilterCriteria};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("assets/peliculas.json")).await?;
//!
//! let criteria = FilterCriteria {
//!     genre: Some("Drama".to_string()),
//!     year: None,
//! };
//! let view = catalog.filtered(&criteria);
//!
//! println!("{} of {} movies match", view.len(), catalog.len());
//! ```

// Public modules
pub mod error;
pub mod filter;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use filter::apply_filter;
pub use loader::load_catalog;
pub use types::{Catalog, FilterCriteria, MovieRecord, Year};
