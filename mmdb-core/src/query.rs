//! Sorted views and filtered subsets
//!
//! All sorts are stable, so records with equal keys keep the store's
//! iteration order (lexicographic by title). Note the deliberate asymmetry:
//! the plain sorts are descending, while filtered results come back
//! ascending by a composite (rating, year) key. That mirrors the original
//! program's behavior and is part of the contract, tested explicitly.

use crate::record::{to_rows, MovieMap, MovieRow};

/// All records, highest rating first.
pub fn sorted_by_rating_desc(movies: &MovieMap) -> Vec<MovieRow> {
    let mut rows = to_rows(movies);
    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows
}

/// All records, most recent year first.
pub fn sorted_by_year_desc(movies: &MovieMap) -> Vec<MovieRow> {
    let mut rows = to_rows(movies);
    rows.sort_by(|a, b| b.year.cmp(&a.year));
    rows
}

/// Records passing every bound that is set; absent bounds are unconstrained.
///
/// A record passes iff `rating >= min_rating`, `year >= start_year`, and
/// `year <= end_year`, for whichever bounds are given. Results are ordered
/// ascending by (rating, year).
pub fn filter(
    movies: &MovieMap,
    min_rating: Option<f64>,
    start_year: Option<u32>,
    end_year: Option<u32>,
) -> Vec<MovieRow> {
    let mut rows: Vec<MovieRow> = to_rows(movies)
        .into_iter()
        .filter(|row| {
            min_rating.map_or(true, |min| row.rating >= min)
                && start_year.map_or(true, |start| row.year >= start)
                && end_year.map_or(true, |end| row.year <= end)
        })
        .collect();
    rows.sort_by(|a, b| a.rating.total_cmp(&b.rating).then(a.year.cmp(&b.year)));
    rows
}
