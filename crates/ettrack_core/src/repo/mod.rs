//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repositories accept only connections whose migrations have been applied.
//! - Repository APIs return semantic errors (duplicate username, missing
//!   schema) in addition to DB transport errors.

use crate::db::migrations::latest_version;
use rusqlite::Connection;

pub mod exercise_repo;
pub mod user_repo;

use user_repo::{RepoError, RepoResult};

/// Rejects connections that skipped `open_db` bootstrap.
///
/// Checks the migration version marker and the presence of the table the
/// calling repository depends on.
fn ensure_connection_ready(conn: &Connection, table: &'static str) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(RepoError::from)?;

    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    Ok(())
}
