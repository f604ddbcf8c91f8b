//! Rating statistics over the current record set
//!
//! Pure and deterministic: the same map always produces the same stats.

use crate::error::{Error, Result};
use crate::record::MovieMap;

/// All records sharing an extreme rating, reported together rather than
/// arbitrarily broken. Titles are in store iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TieSet {
    pub rating: f64,
    pub titles: Vec<String>,
}

/// Aggregate view of the catalogue's ratings.
///
/// `mean` keeps full precision; rounding to two decimals is a display
/// concern left to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub best: TieSet,
    pub worst: TieSet,
}

/// Compute mean, median, and best/worst tie sets.
///
/// Fails with [`Error::EmptyCollection`] on an empty map; there is no
/// degenerate default.
pub fn compute_stats(movies: &MovieMap) -> Result<Stats> {
    if movies.is_empty() {
        return Err(Error::EmptyCollection);
    }

    let mut ratings: Vec<f64> = movies.values().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);

    let count = ratings.len();
    let mean = ratings.iter().sum::<f64>() / count as f64;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };

    let best = tie_set(movies, ratings[count - 1]);
    let worst = tie_set(movies, ratings[0]);

    Ok(Stats {
        mean,
        median,
        best,
        worst,
    })
}

fn tie_set(movies: &MovieMap, rating: f64) -> TieSet {
    let titles = movies
        .iter()
        .filter(|(_, record)| record.rating == rating)
        .map(|(title, _)| title.clone())
        .collect();
    TieSet { rating, titles }
}
