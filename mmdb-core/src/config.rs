//! Backing-file path resolution
//!
//! The store path is always an explicit handle; nothing in the core reads a
//! global. Resolution priority order:
//! 1. Command-line argument (highest priority)
//! 2. `MMDB_DATABASE` environment variable
//! 3. OS-dependent data directory (`<data_local_dir>/mmdb/movies.json`)
//! 4. `movies.json` in the working directory (fallback)

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the backing file.
pub const DATABASE_ENV_VAR: &str = "MMDB_DATABASE";

const DATABASE_FILE_NAME: &str = "movies.json";

/// Resolve the backing-file path from an optional CLI override.
pub fn resolve_database_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: environment variable
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: platform data directory
    if let Some(dir) = dirs::data_local_dir() {
        return dir.join("mmdb").join(DATABASE_FILE_NAME);
    }

    // Priority 4: working-directory fallback
    PathBuf::from(DATABASE_FILE_NAME)
}

/// Create the parent directory of the backing file if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::StorageWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let path = resolve_database_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn default_ends_with_database_file_name() {
        // Without a CLI override the result depends on the environment, but
        // it always names the standard file.
        let path = resolve_database_path(None);
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(DATABASE_FILE_NAME)
        );
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("movies.json");
        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
