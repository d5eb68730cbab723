use super::support::*;

#[test]
fn duplicate_email_leaves_directory_unchanged() {
    let mut directory = UserDirectory::new();
    directory.create_account("a@example.com", "pw", "Alice", "alice").unwrap();
    let before = directory.clone();

    for username in ["other", "alice", ""] {
        let err = directory
            .create_account("a@example.com", "pw2", "", username)
            .unwrap_err();
        assert_eq!(err, AppError::EmailTaken);
    }
    assert_eq!(directory, before);
}

#[test]
fn usernames_are_unique_ignoring_case() {
    let mut directory = UserDirectory::new();
    directory.create_account("b@example.com", "pw", "", "bob").unwrap();

    let err = directory.create_account("b2@example.com", "pw", "", "Bob").unwrap_err();
    assert_eq!(err, AppError::UsernameTaken);
    assert_eq!(directory.len(), 1);

    let mut app = App::new();
    app.sign_up("B@example.com", "pw", "", "BOB").unwrap();
    assert_eq!(app.current_user().unwrap().username, "bob");
    assert_eq!(
        app.sign_up("x@example.com", "pw", "", "bOb").unwrap_err(),
        AppError::UsernameTaken
    );
}

#[test]
fn failed_login_keeps_previous_session() {
    let mut app = app_with_users(&["alice", "bob"]);
    assert_eq!(app.current_user().unwrap().username, "bob");

    assert_eq!(
        app.log_in(&email("alice"), "nope").unwrap_err(),
        AppError::IncorrectPassword
    );
    assert_eq!(app.current_user().unwrap().username, "bob");

    assert_eq!(
        app.log_in("nobody@example.com", "pw").unwrap_err(),
        AppError::NoSuchAccount
    );
    assert_eq!(app.current_user().unwrap().username, "bob");

    app.log_out();
    assert_eq!(
        app.log_in(&email("alice"), "nope").unwrap_err(),
        AppError::IncorrectPassword
    );
    assert!(app.current_user().is_none());
}

#[test]
fn login_replaces_an_active_session() {
    let mut app = app_with_users(&["alice", "bob"]);
    app.log_in(&email("alice"), "pw").unwrap();
    assert_eq!(app.current_user().unwrap().username, "alice");
}

#[test]
fn auth_errors_show_as_timed_notices() {
    let mut app = app_with_users(&["alice"]);
    app.log_out();

    let start = Instant::now();
    app.log_in_at(&email("alice"), "bad", start).unwrap_err();
    assert_eq!(app.notice(start), Some("Incorrect password."));
    assert_eq!(
        app.notice(start + Duration::from_secs(4)),
        Some("Incorrect password.")
    );
    assert_eq!(app.notice(start + Duration::from_secs(5)), None);

    app.sign_up_at(&email("alice"), "pw", "", "again", start).unwrap_err();
    assert_eq!(app.notice(start), Some("Email already in use."));

    app.log_in_at(&email("alice"), "pw", start).unwrap();
    assert_eq!(app.notice(start), None);
}

#[test]
fn session_manager_follows_the_directory() {
    let world = World::with_users(&["alice"]);
    let mut session = SessionManager::new();
    assert!(session.current(&world.directory).is_none());

    let account = session.log_in(&world.directory, &email("alice"), "pw").unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(session.current_email(), Some("alice@example.com"));

    session.log_out();
    assert!(!session.is_logged_in());
}

#[test]
fn taken_email_wins_over_blank_username() {
    let mut app = App::new();
    app.sign_up("a@example.com", "pw", "", "alice").unwrap();

    for username in ["", "   ", "alice"] {
        assert_eq!(
            app.sign_up("a@example.com", "pw", "", username).unwrap_err(),
            AppError::EmailTaken
        );
    }

    let strict = AppConfig::from_toml_str("[validation]\nrequire_username = true\n").unwrap();
    let mut app = App::with_config(strict);
    app.sign_up("a@example.com", "pw", "", "alice").unwrap();
    assert_eq!(
        app.sign_up("a@example.com", "pw", "", "").unwrap_err(),
        AppError::EmailTaken
    );
    assert!(matches!(
        app.sign_up("b@example.com", "pw", "", "").unwrap_err(),
        AppError::Validation(_)
    ));
    assert_eq!(app.directory().len(), 1);
}
