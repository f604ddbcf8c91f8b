//! Collaborator-facing query surface
//!
//! One [`Catalog`] binds the engines to a single [`MovieStore`]. Every
//! operation re-loads from disk, so results always reflect the latest saved
//! state, and every result is a value snapshot with no references back into
//! the store.

use crate::error::{Error, Result};
use crate::query;
use crate::record::{to_rows, MovieRow};
use crate::search;
use crate::stats::{compute_stats, Stats};
use crate::store::MovieStore;
use rand::Rng;

/// One fuzzy-search result: the matched record plus its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub year: u32,
    pub rating: f64,
    pub score: f64,
}

pub struct Catalog {
    store: MovieStore,
}

impl Catalog {
    pub fn new(store: MovieStore) -> Self {
        Self { store }
    }

    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(MovieStore::new(path))
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    /// Every record, in store iteration order.
    pub fn list_all(&self) -> Result<Vec<MovieRow>> {
        Ok(to_rows(&self.store.load()?))
    }

    /// Mean, median, and best/worst tie sets over the current records.
    pub fn stats(&self) -> Result<Stats> {
        compute_stats(&self.store.load()?)
    }

    /// A uniformly random record, for the "what to watch tonight" prompt.
    pub fn random_pick(&self) -> Result<MovieRow> {
        let movies = self.store.load()?;
        if movies.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let mut rows = to_rows(&movies);
        let index = rand::thread_rng().gen_range(0..rows.len());
        Ok(rows.swap_remove(index))
    }

    /// Fuzzy-match `query` against stored titles; see [`crate::search`] for
    /// the threshold/ranking/limit contract.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let movies = self.store.load()?;
        let hits = search::search(
            query,
            movies.keys().map(String::as_str),
            search::DEFAULT_THRESHOLD,
            search::DEFAULT_LIMIT,
        );
        Ok(hits
            .into_iter()
            .map(|(title, score)| {
                let record = movies[title];
                SearchHit {
                    title: title.to_string(),
                    year: record.year,
                    rating: record.rating,
                    score,
                }
            })
            .collect())
    }

    pub fn sorted_by_rating(&self) -> Result<Vec<MovieRow>> {
        Ok(query::sorted_by_rating_desc(&self.store.load()?))
    }

    pub fn sorted_by_year(&self) -> Result<Vec<MovieRow>> {
        Ok(query::sorted_by_year_desc(&self.store.load()?))
    }

    pub fn filtered(
        &self,
        min_rating: Option<f64>,
        start_year: Option<u32>,
        end_year: Option<u32>,
    ) -> Result<Vec<MovieRow>> {
        Ok(query::filter(
            &self.store.load()?,
            min_rating,
            start_year,
            end_year,
        ))
    }

    pub fn add(&self, title: &str, year: u32, rating: f64) -> Result<()> {
        self.store.add(title, year, rating)
    }

    pub fn remove(&self, title: &str) -> Result<()> {
        self.store.remove(title)
    }

    pub fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
        self.store.update_rating(title, rating)
    }
}
