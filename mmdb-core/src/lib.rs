//! # MMDB Core Library
//!
//! Core of the movie catalogue manager: durable storage of keyed movie
//! records plus the query and aggregation operations derived from them.
//!
//! - Record store: load/save/add/remove/update against a JSON backing file
//! - Validation: field-level invariants for rating, year, and title
//! - Aggregation: mean, median, and best/worst tie sets
//! - Ordering & filtering: sorted views and bounded subsets
//! - Fuzzy search: typo-tolerant title matching
//!
//! The interactive terminal front end lives in the `mmdb-cli` crate and
//! consumes this library through [`Catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod search;
pub mod stats;
pub mod store;
pub mod validate;

pub use catalog::{Catalog, SearchHit};
pub use error::{Error, Result};
pub use record::{MovieMap, MovieRecord, MovieRow};
pub use stats::{Stats, TieSet};
pub use store::MovieStore;
