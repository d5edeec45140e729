//! User registration use-case service.
//!
//! # Responsibility
//! - Sequence store operations for "register a user and return its canonical
//!   persisted form".
//! - Translate storage-layer failures into caller-facing errors.
//!
//! # Invariants
//! - Registration is a strict two-phase flow: write, then re-read. Only the
//!   re-read record is handed back, so store-applied defaults are reflected.
//! - A failed or empty re-read after a successful write is reported as a
//!   distinct anomaly, never merged with a plain storage failure and never
//!   swallowed.
//! - No step is retried; every failure terminates the flow and is reported
//!   once.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoError, RepoResult, UserFilter, UserRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-facing registration failure.
#[derive(Debug)]
pub enum RegistrationError {
    /// The requested username is already registered. Recoverable: the caller
    /// can pick another name.
    UsernameTaken { username: String },
    /// The store rejected the write for any other reason. Carries the
    /// underlying diagnostic.
    Storage(RepoError),
    /// The write succeeded but the immediate read-back failed or came up
    /// empty. The record's durability is uncertain; surfaced distinctly so
    /// callers never mistake it for a plain storage failure.
    PostWriteLookupFailed {
        user_id: UserId,
        source: Option<RepoError>,
    },
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameTaken { .. } => {
                write!(f, "User already exists, please select a different username.")
            }
            Self::Storage(err) => write!(f, "Error when saving user:\n{err}"),
            Self::PostWriteLookupFailed {
                source: Some(err), ..
            } => write!(f, "Created user not found with error:\n{err}"),
            Self::PostWriteLookupFailed {
                user_id,
                source: None,
            } => write!(
                f,
                "Created user not found: id `{user_id}` missing immediately after save"
            ),
        }
    }
}

impl Error for RegistrationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UsernameTaken { .. } => None,
            Self::Storage(err) => Some(err),
            Self::PostWriteLookupFailed { source, .. } => {
                source.as_ref().map(|err| err as &(dyn Error + 'static))
            }
        }
    }
}

/// Use-case service for user registration and account queries.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new user and returns its canonical persisted form.
    ///
    /// # Contract
    /// - The candidate id is generated here, before the write; the store
    ///   never assigns user identity.
    /// - The returned record comes from the post-write read-back, not from
    ///   the insert acknowledgement.
    pub fn register_user(
        &self,
        username: impl Into<String>,
    ) -> Result<User, RegistrationError> {
        let candidate = User::new(username);

        let user_id = match self.repo.create_user(&candidate) {
            Ok(id) => id,
            Err(RepoError::DuplicateUsername(username)) => {
                return Err(RegistrationError::UsernameTaken { username });
            }
            Err(err) => return Err(RegistrationError::Storage(err)),
        };

        match self.repo.get_user(&user_id) {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(RegistrationError::PostWriteLookupFailed {
                user_id,
                source: None,
            }),
            Err(err) => Err(RegistrationError::PostWriteLookupFailed {
                user_id,
                source: Some(err),
            }),
        }
    }

    /// Fetches one user by id. Empty result is `Ok(None)`.
    pub fn get_user(&self, id: &str) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Lists all registered users in store-native order.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// Removes every user matching `filter`, returning the removed count.
    ///
    /// The default filter matches all records, so calling this with
    /// `UserFilter::default()` empties the user collection.
    pub fn remove_users(&self, filter: &UserFilter) -> RepoResult<usize> {
        self.repo.delete_users(filter)
    }
}
