use ettrack_core::db::open_db_in_memory;
use ettrack_core::{
    ExerciseService, SqliteExerciseRepository, SqliteUserRepository, UserFilter, UserService,
};

#[test]
fn log_and_list_roundtrip_for_one_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExerciseRepository::try_new(&conn).unwrap();
    let service = ExerciseService::new(repo);

    let id = service.log_exercise("user-1", "morning run", 30.0).unwrap();
    assert!(!id.is_empty());

    let entries = service.exercises_for_user("user-1").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, "morning run");
    assert_eq!(entries[0].duration, 30.0);
    assert!(entries[0].logged_at > 0);
}

#[test]
fn listing_is_scoped_to_the_requested_user_and_ordered_by_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExerciseRepository::try_new(&conn).unwrap();
    let service = ExerciseService::new(repo);

    service
        .log_exercise_at("user-1", "evening swim", 45.0, 2_000)
        .unwrap();
    service
        .log_exercise_at("user-1", "morning run", 30.0, 1_000)
        .unwrap();
    service
        .log_exercise_at("user-2", "yoga", 20.0, 1_500)
        .unwrap();

    let entries = service.exercises_for_user("user-1").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "morning run");
    assert_eq!(entries[1].description, "evening swim");
}

#[test]
fn entries_do_not_require_an_existing_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExerciseRepository::try_new(&conn).unwrap();
    let service = ExerciseService::new(repo);

    // The link is by value only; no user row exists for this id.
    service
        .log_exercise("never-registered", "shadow boxing", 10.0)
        .unwrap();
    assert_eq!(service.exercises_for_user("never-registered").unwrap().len(), 1);
}

#[test]
fn deleting_a_user_leaves_its_entries_in_place() {
    let conn = open_db_in_memory().unwrap();
    let user_repo = SqliteUserRepository::try_new(&conn).unwrap();
    let users = UserService::new(user_repo);
    let exercise_repo = SqliteExerciseRepository::try_new(&conn).unwrap();
    let exercises = ExerciseService::new(exercise_repo);

    let bob = users.register_user("bob").unwrap();
    exercises.log_exercise(bob.id.clone(), "deadlifts", 25.0).unwrap();

    let removed = users.remove_users(&UserFilter::by_username("bob")).unwrap();
    assert_eq!(removed, 1);
    assert!(users.get_user(&bob.id).unwrap().is_none());

    // No cascade: the orphaned entry survives.
    assert_eq!(exercises.exercises_for_user(&bob.id).unwrap().len(), 1);
}

#[test]
fn blank_description_is_rejected_by_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExerciseRepository::try_new(&conn).unwrap();
    let service = ExerciseService::new(repo);

    assert!(service.log_exercise("user-1", "", 5.0).is_err());
}
