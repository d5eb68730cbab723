use std::collections::HashSet;

use super::support::*;

#[test]
fn feed_reads_newest_first() {
    let mut world = World::with_users(&["alice", "bob"]);
    let published: Vec<String> = (0..6).map(|i| format!("https://img.example.com/{i}.png")).collect();
    for (i, url) in published.iter().enumerate() {
        let author = if i % 2 == 0 { "alice" } else { "bob" };
        world.publish(author, url, "pic");
    }

    let read: Vec<&str> = world.feed.all().map(|post| post.url.as_str()).collect();
    let expected: Vec<&str> = published.iter().rev().map(String::as_str).collect();
    assert_eq!(read, expected);
    assert_eq!(world.feed.len(), 6);

    let ids: HashSet<&str> = world.feed.all().map(|post| post.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
}

#[test]
fn publishing_without_a_session_fails() {
    let mut app = App::new();
    assert_eq!(app.add_pic("u1", "cat").unwrap_err(), AppError::NotLoggedIn);
    assert!(app.feed().is_empty());

    let mut feed = Feed::new();
    assert_eq!(feed.publish(None, "u1", "cat").unwrap_err(), AppError::NotLoggedIn);
}

#[test]
fn strict_policy_rejects_bad_urls() {
    let config = AppConfig::from_toml_str("[validation]\nrequire_valid_url = true\n").unwrap();
    let mut app = App::with_config(config);
    app.sign_up(&email("alice"), "pw", "", "alice").unwrap();

    let err = app.add_pic("not a url", "cat").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(app.feed().is_empty());

    app.add_pic("https://img.example.com/cat.png", "cat").unwrap();
    assert_eq!(app.feed().len(), 1);
}
