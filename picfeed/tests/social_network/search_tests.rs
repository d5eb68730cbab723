use super::support::*;

#[test]
fn wildcard_selects_everything() {
    let world = World::scenario();
    for current in [None, Some("alice"), Some("carol")] {
        for query in ["*", "* from:bob", "from:carol *", " * "] {
            assert_eq!(
                world.search(current, query).unwrap(),
                ["u1", "u2", "u3"],
                "query {query:?} as {current:?}"
            );
        }
    }
}

#[test]
fn wildcard_keeps_keywords() {
    let world = World::scenario();
    assert_eq!(world.search(None, "* dog").unwrap(), ["u2", "u3"]);
}

#[test]
fn from_filter_selects_one_author() {
    let world = World::scenario();
    assert_eq!(world.search(Some("bob"), "from:alice").unwrap(), ["u2"]);
    assert_eq!(world.search(Some("bob"), "dog from:alice").unwrap(), ["u2"]);
    assert!(world.search(Some("bob"), "from:alice cat").unwrap().is_empty());

    for query in ["from:carol", "from:carol cat", "cat from:carol dog"] {
        let current = Some(world.account("alice"));
        let outcome = QueryEngine::new(&world.feed, &world.directory, current)
            .search(query)
            .unwrap();
        assert!(outcome.posts.iter().all(|post| post.author == "carol"));
    }
}

#[test]
fn from_filter_needs_a_session() {
    let world = World::scenario();
    assert_eq!(world.search(None, "from:alice").unwrap_err(), AppError::NotLoggedIn);
    assert_eq!(world.search(None, "").unwrap_err(), AppError::NotLoggedIn);
}

#[test]
fn empty_query_shows_home_feed() {
    let world = World::scenario();
    assert_eq!(world.search(Some("alice"), "").unwrap(), ["u1", "u2"]);
    assert_eq!(world.search(Some("carol"), "").unwrap(), ["u3"]);
}

#[test]
fn keywords_search_the_whole_feed() {
    let world = World::scenario();
    assert_eq!(world.search(Some("alice"), "cat").unwrap(), ["u1", "u3"]);
    assert_eq!(world.search(Some("alice"), "cat dog").unwrap(), ["u3"]);
    assert_eq!(world.search(Some("alice"), "  ").unwrap(), ["u1", "u2", "u3"]);
}

#[test]
fn keywords_are_case_sensitive_by_default() {
    let mut world = World::scenario();
    world.publish("bob", "u4", "Cat nap");
    assert!(!world.search(None, "Cat").unwrap().contains(&"u4"));

    let mut app = App::with_config(AppConfig::from_toml_str("[search]\ncase_insensitive_keywords = true\n").unwrap());
    app.sign_up(&email("bob"), "pw", "", "bob").unwrap();
    app.add_pic("u4", "Cat nap").unwrap();
    assert_eq!(urls(&app.search("cat").unwrap().posts), ["u4"]);
}

#[test]
fn info_panel_follows_scope() {
    let mut app = app_with_users(&["bob", "carol", "alice"]);
    app.follow(&email("bob")).unwrap();
    app.add_pic("u2", "dog pic").unwrap();

    let all = app.search("*").unwrap();
    assert_eq!(all.info, DisplayInfo::Count { total: 1 });

    let own = app.search("from:alice").unwrap();
    assert!(matches!(own.info, DisplayInfo::OwnProfile { .. }));

    let bob = app.search("from:bob").unwrap();
    match &bob.info {
        DisplayInfo::Profile {
            profile,
            is_followed_by_current,
            follows_current,
        } => {
            assert_eq!(profile.username, "bob");
            assert_eq!(profile.followers, 1);
            assert!(*is_followed_by_current);
            assert!(!*follows_current);
        }
        other => panic!("unexpected info {other:?}"),
    }
    assert_eq!(bob.info.follow_action().unwrap().label, "Unfollow");

    let ghost = app.search("from:ghost").unwrap();
    assert!(ghost.posts.is_empty());
    assert_eq!(ghost.info.to_string(), "No such user.");
    assert_eq!(
        ghost.info,
        DisplayInfo::NoSuchUser {
            username: "ghost".to_string()
        }
    );
}

#[test]
fn search_view_serializes_for_renderers() {
    let mut app = app_with_users(&["alice"]);
    app.add_pic("u2", "dog pic").unwrap();

    let view = app.search("").unwrap().to_view();
    assert_eq!(view.query, "None");
    assert!(view.info_text.starts_with("Your profile:"));

    let json = serde_json::to_value(app.search("* dog").unwrap().to_view()).unwrap();
    assert_eq!(json["query"], "* dog");
    assert_eq!(json["info"]["kind"], "count");
    assert_eq!(json["info"]["total"], 1);
    assert_eq!(json["posts"][0]["author"], "alice");
}

#[test]
fn wildcard_joins_the_words_around_it() {
    let mut world = World::with_users(&["alice"]);
    world.publish("alice", "u1", "cat and dog");
    world.publish("alice", "u2", "catdog");

    assert_eq!(world.search(None, "cat * dog").unwrap(), ["u2"]);
    assert_eq!(world.search(None, "cat dog").unwrap(), ["u2", "u1"]);
}
