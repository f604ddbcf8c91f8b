//! Record types shared across the catalogue core

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One movie's stored fields. The title is the map key, not part of the record.
///
/// `rating` is validated to [0, 10] at the input boundary and not re-checked
/// after storage. `year` is immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieRecord {
    pub rating: f64,
    pub year: u32,
}

/// In-memory snapshot of the catalogue: title -> record.
///
/// A `BTreeMap` keeps iteration deterministic (lexicographic by title), which
/// is the tie-break order for every sorted or ranked view.
pub type MovieMap = BTreeMap<String, MovieRecord>;

/// One movie as handed to the presentation layer: a value snapshot, no
/// references back into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub title: String,
    pub year: u32,
    pub rating: f64,
}

impl MovieRow {
    pub fn new(title: &str, record: &MovieRecord) -> Self {
        Self {
            title: title.to_string(),
            year: record.year,
            rating: record.rating,
        }
    }
}

/// Flatten the map into presentation rows, in store iteration order.
pub fn to_rows(movies: &MovieMap) -> Vec<MovieRow> {
    movies
        .iter()
        .map(|(title, record)| MovieRow::new(title, record))
        .collect()
}
