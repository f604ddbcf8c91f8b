//! JSON-file persistence for the movie catalogue
//!
//! Every mutating operation is a full load -> modify -> save cycle, so each
//! call observes the latest on-disk state and applies exactly one change.
//! Saves go through a temp file in the target directory followed by a rename,
//! so a reader never observes a half-written database. Two processes racing
//! on the same file still resolve last-writer-wins; there is no file lock.

use crate::error::{Error, Result};
use crate::record::{MovieMap, MovieRecord};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to one backing file. Multiple independent stores may coexist
/// (separate paths), which is also what keeps tests isolated.
#[derive(Debug, Clone)]
pub struct MovieStore {
    path: PathBuf,
}

impl MovieStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full catalogue from disk.
    ///
    /// A missing file is a valid initial state and yields an empty map; a
    /// file that exists but cannot be read or parsed is an error.
    pub fn load(&self) -> Result<MovieMap> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("database {} absent, starting empty", self.path.display());
                return Ok(MovieMap::new());
            }
            Err(source) => {
                return Err(Error::StorageRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| Error::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the backing file with the full catalogue.
    ///
    /// The JSON is written with 4-space indentation for hand inspection;
    /// the indentation is not semantically required on the read side.
    pub fn save(&self, movies: &MovieMap) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        movies
            .serialize(&mut serializer)
            .map_err(|e| Error::StorageWrite {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            })?;
        buf.push(b'\n');

        // Temp file must live in the target directory so the rename stays on
        // one filesystem and is atomic.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| {
            Error::StorageWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        tmp.write_all(&buf).map_err(|source| Error::StorageWrite {
            path: self.path.clone(),
            source,
        })?;
        tmp.persist(&self.path).map_err(|e| Error::StorageWrite {
            path: self.path.clone(),
            source: e.error,
        })?;

        debug!(
            "saved {} record(s) to {}",
            movies.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Insert a new record. Fails if the title is already present; an add
    /// never overwrites.
    pub fn add(&self, title: &str, year: u32, rating: f64) -> Result<()> {
        let mut movies = self.load()?;
        if movies.contains_key(title) {
            return Err(Error::DuplicateTitle(title.to_string()));
        }
        movies.insert(title.to_string(), MovieRecord { rating, year });
        self.save(&movies)?;
        info!("added movie {title:?} ({year}, rated {rating})");
        Ok(())
    }

    /// Remove a record by title. A missing title is an error, so callers get
    /// a consistent signal instead of a silent no-op.
    pub fn remove(&self, title: &str) -> Result<()> {
        let mut movies = self.load()?;
        if movies.remove(title).is_none() {
            return Err(Error::NotFound(title.to_string()));
        }
        self.save(&movies)?;
        info!("removed movie {title:?}");
        Ok(())
    }

    /// Replace the rating of an existing record. Only `rating` is mutable;
    /// `year` is fixed at creation.
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
        let mut movies = self.load()?;
        match movies.get_mut(title) {
            Some(record) => record.rating = rating,
            None => return Err(Error::NotFound(title.to_string())),
        }
        self.save(&movies)?;
        info!("updated movie {title:?} to rating {rating}");
        Ok(())
    }
}
