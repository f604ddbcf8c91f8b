//! Integration tests for the catalogue core
//!
//! Exercises the full load -> modify -> save cycle through the `Catalog`
//! facade against a temp-file backing store.

use mmdb_core::{Catalog, Error, MovieStore};
use tempfile::TempDir;

fn seeded_catalog() -> (TempDir, Catalog) {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = Catalog::open(dir.path().join("movies.json"));
    for (title, rating, year) in [
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
    ] {
        catalog.add(title, year, rating).expect("seed record");
    }
    (dir, catalog)
}

#[test]
fn list_all_returns_every_record_in_title_order() {
    let (_dir, catalog) = seeded_catalog();
    let rows = catalog.list_all().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].title, "12 Angry Men");
    assert_eq!(rows[9].title, "The Shawshank Redemption");
    let mut titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    let sorted = titles.clone();
    titles.sort();
    assert_eq!(titles, sorted);
}

#[test]
fn stats_over_the_seed_records() {
    let (_dir, catalog) = seeded_catalog();
    let stats = catalog.stats().unwrap();
    // sum = 84.4 over 10 records
    assert!((stats.mean - 8.44).abs() < 1e-9);
    // sorted ratings: 3.6 8.7 8.8 8.8 8.9 | 8.9 9.0 9.0 9.2 9.5
    assert!((stats.median - 8.9).abs() < 1e-9);
    assert_eq!(stats.best.titles, vec!["The Shawshank Redemption"]);
    assert_eq!(stats.worst.titles, vec!["The Room"]);
}

#[test]
fn search_returns_records_with_scores() {
    let (_dir, catalog) = seeded_catalog();
    let hits = catalog.search("godfathr").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "The Godfather");
    assert_eq!(hits[0].year, 1972);
    assert_eq!(hits[1].title, "The Godfather: Part II");
    assert!(hits[0].score >= 70.0 && hits[1].score >= 70.0);
}

#[test]
fn search_with_no_match_is_empty_not_an_error() {
    let (_dir, catalog) = seeded_catalog();
    assert!(catalog.search("qqqqqqqq").unwrap().is_empty());
}

#[test]
fn filtered_view_uses_ascending_composite_order() {
    let (_dir, catalog) = seeded_catalog();
    let rows = catalog.filtered(Some(8.5), Some(1990), Some(2000)).unwrap();
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Forrest Gump", "Pulp Fiction", "The Shawshank Redemption"]
    );
}

#[test]
fn sorted_views_are_descending() {
    let (_dir, catalog) = seeded_catalog();
    let by_rating = catalog.sorted_by_rating().unwrap();
    assert_eq!(by_rating[0].title, "The Shawshank Redemption");
    assert_eq!(by_rating.last().unwrap().title, "The Room");

    let by_year = catalog.sorted_by_year().unwrap();
    assert_eq!(by_year[0].title, "Everything Everywhere All At Once");
    assert_eq!(by_year.last().unwrap().title, "12 Angry Men");
}

#[test]
fn random_pick_returns_a_stored_record() {
    let (_dir, catalog) = seeded_catalog();
    let all = catalog.list_all().unwrap();
    for _ in 0..20 {
        let pick = catalog.random_pick().unwrap();
        assert!(all.contains(&pick));
    }
}

#[test]
fn empty_catalog_signals_empty_collection() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::open(dir.path().join("movies.json"));
    assert!(matches!(catalog.stats(), Err(Error::EmptyCollection)));
    assert!(matches!(catalog.random_pick(), Err(Error::EmptyCollection)));
    // list/sort/filter/search just come back empty
    assert!(catalog.list_all().unwrap().is_empty());
    assert!(catalog.sorted_by_rating().unwrap().is_empty());
    assert!(catalog.filtered(None, None, None).unwrap().is_empty());
    assert!(catalog.search("anything").unwrap().is_empty());
}

#[test]
fn mutations_are_visible_to_a_second_catalog_on_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    let writer = Catalog::open(&path);
    let reader = Catalog::open(&path);

    writer.add("The Godfather", 1972, 9.2).unwrap();
    assert_eq!(reader.list_all().unwrap().len(), 1);

    writer.update_rating("The Godfather", 9.9).unwrap();
    assert_eq!(reader.list_all().unwrap()[0].rating, 9.9);

    writer.remove("The Godfather").unwrap();
    assert!(reader.list_all().unwrap().is_empty());
}

#[test]
fn saved_file_is_readable_json_with_expected_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    let catalog = Catalog::open(&path);
    catalog.add("The Godfather", 1972, 9.2).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["The Godfather"]["year"], 1972);
    assert_eq!(value["The Godfather"]["rating"], 9.2);
    // human-readable indentation
    assert!(raw.contains("    \"rating\""));
}

#[test]
fn store_handle_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    {
        let catalog = Catalog::open(&path);
        catalog.add("12 Angry Men", 1957, 8.9).unwrap();
    }
    let reopened = Catalog::new(MovieStore::new(&path));
    let rows = reopened.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "12 Angry Men");
}
