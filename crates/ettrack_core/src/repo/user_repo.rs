//! User repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable persistence APIs over canonical `users` storage.
//! - Keep SQL details inside the core persistence boundary.
//! - Translate the store's uniqueness violation into a semantic error.
//!
//! # Invariants
//! - `username` uniqueness is enforced by the store's UNIQUE constraint; this
//!   layer only classifies the resulting failure, it never pre-checks.
//! - Read paths project `id` and `username` only.
//! - An empty fetch result is `Ok(None)`, never an error.

use crate::db::DbError;
use crate::model::user::{User, UserId};
use crate::repo::ensure_connection_ready;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, username FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for tracker persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// The store rejected a write that would duplicate an existing username.
    DuplicateUsername(String),
    /// Any other storage-layer failure (connectivity, malformed query).
    Db(DbError),
    /// Persisted state that cannot be interpreted as a valid record.
    InvalidData(String),
    /// The connection has not been bootstrapped via `open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// The connection is versioned but lacks a table this repository needs.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUsername(username) => {
                write!(f, "username already exists: {username}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Deletion filter for user records.
///
/// The default filter matches every record, so `delete_users(&default)`
/// empties the whole collection. Callers wanting a scoped delete must set a
/// field explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Exact-match username constraint. `None` matches all records.
    pub username: Option<String>,
}

impl UserFilter {
    /// Filter matching exactly one username.
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

/// Repository interface for user persistence operations.
pub trait UserRepository {
    /// Writes a candidate record, returning its id on success.
    ///
    /// Fails with `RepoError::DuplicateUsername` when the store's uniqueness
    /// constraint on `username` fires; any other failure maps to
    /// `RepoError::Db`.
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    /// Fetches one user by id, projecting `id` and `username`.
    fn get_user(&self, id: &str) -> RepoResult<Option<User>>;
    /// Lists all users in store-native order.
    fn list_users(&self) -> RepoResult<Vec<User>>;
    /// Deletes every user matching `filter`, returning the removed count.
    fn delete_users(&self, filter: &UserFilter) -> RepoResult<usize>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "users")?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        let inserted = self.conn.execute(
            "INSERT INTO users (id, username) VALUES (?1, ?2);",
            params![user.id.as_str(), user.username.as_str()],
        );

        match inserted {
            Ok(_) => Ok(user.id.clone()),
            Err(err) if is_unique_violation(&err, "users.username") => {
                Err(RepoError::DuplicateUsername(user.username.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_user(&self, id: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(User::with_id(
                row.get::<_, String>("id")?,
                row.get::<_, String>("username")?,
            )));
        }

        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{USER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(User::with_id(
                row.get::<_, String>("id")?,
                row.get::<_, String>("username")?,
            ));
        }

        Ok(users)
    }

    fn delete_users(&self, filter: &UserFilter) -> RepoResult<usize> {
        let deleted = match &filter.username {
            Some(username) => self.conn.execute(
                "DELETE FROM users WHERE username = ?1;",
                [username.as_str()],
            )?,
            None => self.conn.execute("DELETE FROM users;", [])?,
        };

        Ok(deleted)
    }
}

/// Detects the store's UNIQUE/PRIMARY KEY rejection for a specific column.
///
/// SQLite reports these as extended result codes 2067 (UNIQUE) and 1555
/// (PRIMARY KEY) with the offending column spelled out in the message.
fn is_unique_violation(err: &rusqlite::Error, column: &str) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, message) => {
            let unique = failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY;
            unique
                && message
                    .as_deref()
                    .is_some_and(|text| text.contains(column))
        }
        _ => false,
    }
}
