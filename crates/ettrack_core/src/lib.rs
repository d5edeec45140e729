//! Core domain logic for the exercise tracker.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::resolve_db_path;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exercise::{Exercise, ExerciseId};
pub use model::user::{User, UserId};
pub use repo::exercise_repo::{ExerciseRepository, SqliteExerciseRepository};
pub use repo::user_repo::{
    RepoError, RepoResult, SqliteUserRepository, UserFilter, UserRepository,
};
pub use service::exercise_service::ExerciseService;
pub use service::user_service::{RegistrationError, UserService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
