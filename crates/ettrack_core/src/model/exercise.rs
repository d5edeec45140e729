//! Exercise entry domain model.
//!
//! # Invariants
//! - `user_id` links by value only; existence of the referenced user is not
//!   checked, and deleting a user leaves its exercise entries in place.
//! - `logged_at` defaults to creation time when the caller supplies none.

use crate::model::user::UserId;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const EXERCISE_ID_LEN: usize = 10;

/// Stable short identifier for an exercise entry.
pub type ExerciseId = String;

/// One logged exercise session belonging to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Client-generated short random id, immutable once assigned.
    pub id: ExerciseId,
    /// Owning user's id. Not validated for existence.
    pub user_id: UserId,
    /// Free-form activity description. Presence is store-enforced.
    pub description: String,
    /// Session length in minutes.
    pub duration: f64,
    /// Unix epoch milliseconds when the session happened.
    pub logged_at: i64,
}

impl Exercise {
    /// Builds an entry timestamped at the current wall-clock time.
    pub fn new(
        user_id: impl Into<UserId>,
        description: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            id: nanoid!(EXERCISE_ID_LEN),
            user_id: user_id.into(),
            description: description.into(),
            duration,
            logged_at: now_epoch_ms(),
        }
    }

    /// Overrides the default timestamp with an explicit epoch-ms value.
    pub fn logged_at_ms(mut self, epoch_ms: i64) -> Self {
        self.logged_at = epoch_ms;
        self
    }
}

fn now_epoch_ms() -> i64 {
    // Clock-before-epoch only happens on a badly misconfigured host; clamp
    // to 0 instead of failing entry construction.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::Exercise;

    #[test]
    fn new_defaults_timestamp_to_now() {
        let before = super::now_epoch_ms();
        let entry = Exercise::new("user-1", "morning run", 30.0);
        let after = super::now_epoch_ms();
        assert!(entry.logged_at >= before && entry.logged_at <= after);
    }

    #[test]
    fn logged_at_ms_overrides_default() {
        let entry = Exercise::new("user-1", "swim", 45.0).logged_at_ms(1_700_000_000_000);
        assert_eq!(entry.logged_at, 1_700_000_000_000);
    }
}
