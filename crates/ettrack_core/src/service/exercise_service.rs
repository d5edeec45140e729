//! Exercise entry use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for logging and reading exercise sessions.
//! - Delegate persistence to repository implementations.

use crate::model::exercise::{Exercise, ExerciseId};
use crate::model::user::UserId;
use crate::repo::exercise_repo::ExerciseRepository;
use crate::repo::user_repo::RepoResult;

/// Use-case service wrapper for exercise entry operations.
pub struct ExerciseService<R: ExerciseRepository> {
    repo: R,
}

impl<R: ExerciseRepository> ExerciseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Logs an exercise session timestamped at the current time.
    ///
    /// # Contract
    /// - `user_id` is stored as given; existence of the user is not checked.
    /// - Returns the created stable entry id.
    pub fn log_exercise(
        &self,
        user_id: impl Into<UserId>,
        description: impl Into<String>,
        duration: f64,
    ) -> RepoResult<ExerciseId> {
        let entry = Exercise::new(user_id, description, duration);
        self.repo.log_exercise(&entry)
    }

    /// Logs an exercise session with an explicit epoch-ms timestamp.
    pub fn log_exercise_at(
        &self,
        user_id: impl Into<UserId>,
        description: impl Into<String>,
        duration: f64,
        epoch_ms: i64,
    ) -> RepoResult<ExerciseId> {
        let entry = Exercise::new(user_id, description, duration).logged_at_ms(epoch_ms);
        self.repo.log_exercise(&entry)
    }

    /// Lists all entries belonging to `user_id`, oldest first.
    pub fn exercises_for_user(&self, user_id: &str) -> RepoResult<Vec<Exercise>> {
        self.repo.list_for_user(user_id)
    }
}
