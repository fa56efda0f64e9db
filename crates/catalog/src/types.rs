//! Core domain types for the movie catalog.
//!
//! This module defines the record type loaded from the JSON source, the
//! catalog that owns the loaded records, and the filter criteria applied
//! against them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Release year of a movie.
pub type Year = u16;

/// One entry of the movie catalog.
///
/// Field names are renamed to match the JSON source (`titulo`, `genero`,
/// `lanzamiento`). Records are never mutated after load; every
/// transformation produces a new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "lanzamiento")]
    pub release_year: Year,
}

/// Criteria for filtering the catalog.
///
/// `None` means "no constraint" for that field. Explicit options instead of
/// sentinel values (`''`, `0`) keep a record with an empty genre or year
/// zero filterable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep only records whose genre equals this exactly.
    pub genre: Option<String>,
    /// Keep only records released in this exact year.
    pub year: Option<Year>,
}

impl FilterCriteria {
    /// Criteria that keep every record.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Returns true when this record satisfies both constraints.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |genre| record.genre == genre);
        let year_ok = self.year.map_or(true, |year| record.release_year == year);
        genre_ok && year_ok
    }
}

/// The loaded movie catalog plus the unique-value lists derived from it.
///
/// The catalog is set once at load time and read-only afterwards. The unique
/// genre and year lists are computed once here, from the full catalog (not
/// from any filtered view), preserving first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    genres: Vec<String>,
    years: Vec<Year>,
}

impl Catalog {
    /// Build a catalog from loaded records, computing the unique genre and
    /// year lists in first-seen order.
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let mut seen_genres = HashSet::new();
        let mut genres = Vec::new();
        let mut seen_years = HashSet::new();
        let mut years = Vec::new();

        for record in &records {
            if seen_genres.insert(record.genre.clone()) {
                genres.push(record.genre.clone());
            }
            if seen_years.insert(record.release_year) {
                years.push(record.release_year);
            }
        }

        Self {
            records,
            genres,
            years,
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Unique genres, first-seen order, no duplicates.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Unique release years, first-seen order, no duplicates.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Recompute the filtered view for the given criteria.
    ///
    /// The view is rebuilt wholesale on every call; it is always an
    /// order-preserving subsequence of the catalog.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<MovieRecord> {
        crate::filter::apply_filter(&self.records, criteria)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, year: Year) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            release_year: year,
        }
    }

    #[test]
    fn test_unique_genres_first_seen_order() {
        let catalog = Catalog::new(vec![
            record("A", "Drama", 2001),
            record("B", "Comedy", 2015),
            record("C", "Drama", 2010),
            record("D", "Terror", 1999),
        ]);

        assert_eq!(catalog.genres(), ["Drama", "Comedy", "Terror"]);
    }

    #[test]
    fn test_unique_years_first_seen_order() {
        let catalog = Catalog::new(vec![
            record("A", "Drama", 2001),
            record("B", "Comedy", 2015),
            record("C", "Drama", 2001),
        ]);

        assert_eq!(catalog.years(), [2001, 2015]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());
        assert!(catalog.years().is_empty());
    }

    #[test]
    fn test_record_json_field_names() {
        let json = r#"{"titulo": "Amores Perros", "genero": "Drama", "lanzamiento": 2000}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.title, "Amores Perros");
        assert_eq!(record.genre, "Drama");
        assert_eq!(record.release_year, 2000);
    }

    #[test]
    fn test_criteria_matches() {
        let r = record("A", "Drama", 2001);

        assert!(FilterCriteria::unconstrained().matches(&r));
        assert!(
            FilterCriteria {
                genre: Some("Drama".to_string()),
                year: Some(2001),
            }
            .matches(&r)
        );
        assert!(
            !FilterCriteria {
                genre: Some("Comedy".to_string()),
                year: None,
            }
            .matches(&r)
        );
        assert!(
            !FilterCriteria {
                genre: None,
                year: Some(1999),
            }
            .matches(&r)
        );
    }
}
