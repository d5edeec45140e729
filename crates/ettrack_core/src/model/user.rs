//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record returned to callers.
//! - Own identifier generation for new registration candidates.
//!
//! # Invariants
//! - `id` is generated client-side before the write; the store never assigns
//!   user identity.
//! - `id` is stable and never reused for another user.
//! - `username` uniqueness is enforced by the store, not by this model.

use nanoid::nanoid;
use serde::{Deserialize, Serialize};

/// Length of generated user identifiers.
///
/// Ten URL-safe characters keep ids short enough to paste into request paths
/// while leaving collision probability negligible for this dataset size.
const USER_ID_LEN: usize = 10;

/// Stable short identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = String;

/// Canonical user record as handed back to callers.
///
/// Holds only the projected fields (`id`, `username`); callers receive
/// transient, disposable copies while the store owns persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Client-generated short random id, immutable once assigned.
    pub id: UserId,
    /// Unique display name. Presence and uniqueness are store-enforced.
    pub username: String,
}

impl User {
    /// Builds an in-memory registration candidate with a fresh id.
    ///
    /// No side effects and no validation; persistence decides whether the
    /// username is acceptable.
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_id(nanoid!(USER_ID_LEN), username)
    }

    /// Builds a user with a caller-provided id.
    ///
    /// Used by read paths and tests where identity already exists.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this user's lifetime.
    pub fn with_id(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{User, USER_ID_LEN};
    use std::collections::HashSet;

    #[test]
    fn new_generates_short_nonempty_ids() {
        let user = User::new("alice");
        assert_eq!(user.id.chars().count(), USER_ID_LEN);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn generated_ids_are_distinct_across_candidates() {
        let ids: HashSet<_> = (0..64).map(|_| User::new("same-name").id).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn serializes_with_external_field_names() {
        let user = User::with_id("abc123xyz0", "alice");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "abc123xyz0");
        assert_eq!(json["username"], "alice");
    }
}
