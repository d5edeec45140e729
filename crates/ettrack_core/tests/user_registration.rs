use ettrack_core::db::{open_db_in_memory, DbError};
use ettrack_core::{
    RegistrationError, RepoError, RepoResult, SqliteUserRepository, User, UserFilter, UserId,
    UserRepository, UserService,
};

#[test]
fn registering_fresh_username_returns_persisted_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let service = UserService::new(repo);

    let user = service.register_user("alice").unwrap();
    assert_eq!(user.username, "alice");
    assert!(!user.id.is_empty());
}

#[test]
fn repeated_registrations_get_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let service = UserService::new(repo);

    let first = service.register_user("alice").unwrap();
    let second = service.register_user("bob").unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn duplicate_username_is_classified_as_taken_with_exact_message() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let service = UserService::new(repo);

    service.register_user("alice").unwrap();
    let err = service.register_user("alice").unwrap_err();

    assert!(matches!(
        &err,
        RegistrationError::UsernameTaken { username } if username == "alice"
    ));
    assert_eq!(
        err.to_string(),
        "User already exists, please select a different username."
    );
}

#[test]
fn registered_record_comes_from_post_write_read_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let service = UserService::new(repo);

    let registered = service.register_user("carol").unwrap();
    let fetched = service.get_user(&registered.id).unwrap().unwrap();
    assert_eq!(fetched, registered);
}

// Delegating stub that fails every write, backed by a real repository so the
// absence of partial records stays observable through the same store.
struct OutageOnWrite<R: UserRepository> {
    inner: R,
}

impl<R: UserRepository> UserRepository for OutageOnWrite<R> {
    fn create_user(&self, _user: &User) -> RepoResult<UserId> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR),
                Some("disk I/O error".to_string()),
            ),
        )))
    }

    fn get_user(&self, id: &str) -> RepoResult<Option<User>> {
        self.inner.get_user(id)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        self.inner.list_users()
    }

    fn delete_users(&self, filter: &UserFilter) -> RepoResult<usize> {
        self.inner.delete_users(filter)
    }
}

#[test]
fn store_outage_during_persist_surfaces_storage_error_and_no_partial_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = OutageOnWrite {
        inner: SqliteUserRepository::try_new(&conn).unwrap(),
    };
    let service = UserService::new(repo);

    let err = service.register_user("dave").unwrap_err();
    assert!(matches!(err, RegistrationError::Storage(_)));
    let message = err.to_string();
    assert!(message.starts_with("Error when saving user:\n"));
    assert!(message.contains("disk I/O error"));

    assert!(service.list_users().unwrap().is_empty());
}

// Write succeeds, but the record is gone by the time the read-back runs.
struct VanishingAfterWrite<R: UserRepository> {
    inner: R,
}

impl<R: UserRepository> UserRepository for VanishingAfterWrite<R> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        self.inner.create_user(user)
    }

    fn get_user(&self, _id: &str) -> RepoResult<Option<User>> {
        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        self.inner.list_users()
    }

    fn delete_users(&self, filter: &UserFilter) -> RepoResult<usize> {
        self.inner.delete_users(filter)
    }
}

#[test]
fn empty_read_back_after_write_is_reported_as_anomaly_not_success() {
    let conn = open_db_in_memory().unwrap();
    let repo = VanishingAfterWrite {
        inner: SqliteUserRepository::try_new(&conn).unwrap(),
    };
    let service = UserService::new(repo);

    let err = service.register_user("erin").unwrap_err();
    match err {
        RegistrationError::PostWriteLookupFailed { user_id, source } => {
            assert!(!user_id.is_empty());
            assert!(source.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
}

// Write succeeds, but the read-back itself errors out.
struct UnreadableAfterWrite<R: UserRepository> {
    inner: R,
}

impl<R: UserRepository> UserRepository for UnreadableAfterWrite<R> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        self.inner.create_user(user)
    }

    fn get_user(&self, _id: &str) -> RepoResult<Option<User>> {
        Err(RepoError::InvalidData(
            "simulated read-back corruption".to_string(),
        ))
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        self.inner.list_users()
    }

    fn delete_users(&self, filter: &UserFilter) -> RepoResult<usize> {
        self.inner.delete_users(filter)
    }
}

#[test]
fn failed_read_back_after_write_is_distinct_from_storage_failure() {
    let conn = open_db_in_memory().unwrap();
    let repo = UnreadableAfterWrite {
        inner: SqliteUserRepository::try_new(&conn).unwrap(),
    };
    let service = UserService::new(repo);

    let err = service.register_user("frank").unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::PostWriteLookupFailed {
            source: Some(_),
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.starts_with("Created user not found with error:\n"));
    assert!(message.contains("simulated read-back corruption"));
}
