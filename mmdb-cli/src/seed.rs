//! Optional sample dataset
//!
//! `--seed` fills an absent database with the original ten demo movies so a
//! new install has something to browse. An existing database is never
//! touched, not even an empty one that has already been saved.

use anyhow::Result;
use mmdb_core::Catalog;
use std::path::Path;
use tracing::info;

const SAMPLE_MOVIES: &[(&str, f64, u32)] = &[
    ("The Shawshank Redemption", 9.5, 1994),
    ("Pulp Fiction", 8.8, 1994),
    ("The Room", 3.6, 2015),
    ("The Godfather", 9.2, 1972),
    ("The Godfather: Part II", 9.0, 1974),
    ("The Dark Knight", 9.0, 2008),
    ("12 Angry Men", 8.9, 1957),
    ("Everything Everywhere All At Once", 8.9, 2022),
    ("Forrest Gump", 8.8, 1994),
    ("Star Wars: Episode V", 8.7, 1980),
];

/// Seed the catalogue if its backing file does not exist yet.
pub fn seed_if_absent(catalog: &Catalog, db_path: &Path) -> Result<()> {
    if db_path.exists() {
        info!("database already exists, skipping seed");
        return Ok(());
    }
    for &(title, rating, year) in SAMPLE_MOVIES {
        catalog.add(title, year, rating)?;
    }
    info!("seeded {} sample movies", SAMPLE_MOVIES.len());
    Ok(())
}
