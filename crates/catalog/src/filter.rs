//! The filter engine: recomputes the filtered view from the catalog.
//!
//! Filtering is a pure function over the record list. Both constraints are
//! AND-combined, matched by exact equality (no case folding, no substring
//! match), and the output preserves catalog order.

use crate::types::{FilterCriteria, MovieRecord};

/// Apply the criteria to a record list, producing a new filtered view.
///
/// ## Algorithm
/// Keep each record iff (no genre constraint OR exact genre match) AND
/// (no year constraint OR exact year match).
///
/// The result is an order-preserving subsequence of the input. Inputs are
/// never mutated, and applying the same criteria twice yields the same
/// result.
pub fn apply_filter(records: &[MovieRecord], criteria: &FilterCriteria) -> Vec<MovieRecord> {
    let filtered: Vec<MovieRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    tracing::debug!(
        input = records.len(),
        output = filtered.len(),
        ?criteria,
        "filter applied"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genre: &str, year: u16) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            release_year: year,
        }
    }

    fn sample_catalog() -> Vec<MovieRecord> {
        vec![
            record("El Secreto", "Drama", 2001),
            record("La Llamada", "Drama", 2010),
            record("Risa Total", "Comedy", 2015),
        ]
    }

    #[test]
    fn test_identity_filter_returns_catalog() {
        let records = sample_catalog();
        let filtered = apply_filter(&records, &FilterCriteria::unconstrained());

        assert_eq!(filtered, records);
    }

    #[test]
    fn test_genre_filter_exact_match_only() {
        let records = sample_catalog();
        let criteria = FilterCriteria {
            genre: Some("Drama".to_string()),
            year: None,
        };

        let filtered = apply_filter(&records, &criteria);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.genre == "Drama"));

        // No case folding: "drama" matches nothing.
        let lowercase = FilterCriteria {
            genre: Some("drama".to_string()),
            year: None,
        };
        assert!(apply_filter(&records, &lowercase).is_empty());
    }

    #[test]
    fn test_genre_then_year_narrows_to_one() {
        let records = sample_catalog();

        let by_genre = apply_filter(
            &records,
            &FilterCriteria {
                genre: Some("Drama".to_string()),
                year: None,
            },
        );
        assert_eq!(by_genre.len(), 2);
        assert_eq!(by_genre[0].title, "El Secreto");
        assert_eq!(by_genre[1].title, "La Llamada");

        let by_both = apply_filter(
            &records,
            &FilterCriteria {
                genre: Some("Drama".to_string()),
                year: Some(2001),
            },
        );
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].title, "El Secreto");
    }

    #[test]
    fn test_idempotent() {
        let records = sample_catalog();
        let criteria = FilterCriteria {
            genre: Some("Drama".to_string()),
            year: None,
        };

        let once = apply_filter(&records, &criteria);
        let twice = apply_filter(&once, &criteria);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            record("A", "Drama", 2001),
            record("B", "Comedy", 2005),
            record("C", "Drama", 2010),
            record("D", "Drama", 2020),
        ];
        let criteria = FilterCriteria {
            genre: Some("Drama".to_string()),
            year: None,
        };

        let filtered = apply_filter(&records, &criteria);
        let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, ["A", "C", "D"]);
    }

    #[test]
    fn test_empty_genre_is_a_real_constraint() {
        // A record with an empty genre is filterable; Some("") is not
        // the same as "no constraint".
        let records = vec![record("Sin Género", "", 2001), record("A", "Drama", 2001)];
        let criteria = FilterCriteria {
            genre: Some(String::new()),
            year: None,
        };

        let filtered = apply_filter(&records, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Sin Género");
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let records = sample_catalog();
        let criteria = FilterCriteria {
            genre: Some("Western".to_string()),
            year: None,
        };

        assert!(apply_filter(&records, &criteria).is_empty());
    }
}
