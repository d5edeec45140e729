//! Exercise entry repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Entries link to their user by id value only; no existence check and no
//!   cascade when the user row is later deleted.
//! - Listing is scoped to a single user and ordered by logged time.

use crate::model::exercise::{Exercise, ExerciseId};
use crate::repo::ensure_connection_ready;
use crate::repo::user_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};

const EXERCISE_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    description,
    duration,
    logged_at
FROM exercises";

/// Repository interface for exercise entry persistence.
pub trait ExerciseRepository {
    /// Writes one exercise entry, returning its id on success.
    fn log_exercise(&self, exercise: &Exercise) -> RepoResult<ExerciseId>;
    /// Lists all entries belonging to `user_id`, oldest first.
    fn list_for_user(&self, user_id: &str) -> RepoResult<Vec<Exercise>>;
}

/// SQLite-backed exercise entry repository.
pub struct SqliteExerciseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExerciseRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "exercises")?;
        Ok(Self { conn })
    }
}

impl ExerciseRepository for SqliteExerciseRepository<'_> {
    fn log_exercise(&self, exercise: &Exercise) -> RepoResult<ExerciseId> {
        self.conn.execute(
            "INSERT INTO exercises (id, user_id, description, duration, logged_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                exercise.id.as_str(),
                exercise.user_id.as_str(),
                exercise.description.as_str(),
                exercise.duration,
                exercise.logged_at,
            ],
        )?;

        Ok(exercise.id.clone())
    }

    fn list_for_user(&self, user_id: &str) -> RepoResult<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EXERCISE_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY logged_at ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([user_id])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            let duration: f64 = row.get("duration")?;
            if !duration.is_finite() {
                return Err(RepoError::InvalidData(format!(
                    "non-finite duration in exercises.duration for user `{user_id}`"
                )));
            }

            entries.push(Exercise {
                id: row.get("id")?,
                user_id: row.get("user_id")?,
                description: row.get("description")?,
                duration,
                logged_at: row.get("logged_at")?,
            });
        }

        Ok(entries)
    }
}
