//! Environment-driven store configuration.
//!
//! # Responsibility
//! - Resolve where the tracker database lives.
//!
//! # Invariants
//! - `ETTRACK_DB_PATH` wins when set and non-blank.
//! - Absence falls back to a fixed local default file.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the database file location.
pub const DB_PATH_ENV: &str = "ETTRACK_DB_PATH";

const DEFAULT_DB_FILE_NAME: &str = "exercise-track.sqlite3";

/// Resolves the database path from the environment.
///
/// Uses `ETTRACK_DB_PATH` (trimmed) when set and non-empty, otherwise a
/// fixed default file in the system temp directory.
pub fn resolve_db_path() -> PathBuf {
    match env::var(DB_PATH_ENV) {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => default_db_path(),
    }
}

fn default_db_path() -> PathBuf {
    env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{default_db_path, DEFAULT_DB_FILE_NAME};

    // resolve_db_path() reads process-global env state, so tests stick to
    // the pure pieces instead of mutating the environment of the whole
    // test binary.
    #[test]
    fn default_path_points_at_fixed_file_name() {
        let path = default_db_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(DEFAULT_DB_FILE_NAME)
        );
        assert!(path.is_absolute());
    }
}
