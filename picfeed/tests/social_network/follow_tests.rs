use super::support::*;

fn lists(world: &World, username: &str) -> (Vec<String>, Vec<String>) {
    let account = world.account(username);
    (account.following().to_vec(), account.followers().to_vec())
}

#[test]
fn follow_then_unfollow_restores_both_sides() {
    let mut world = World::with_users(&["alice", "bob", "carol"]);
    world.follow("alice", "carol");
    world.follow("carol", "bob");
    let alice_before = lists(&world, "alice");
    let bob_before = lists(&world, "bob");

    world.follow("alice", "bob");
    assert!(world.account("alice").follows("bob"));
    assert!(world.account("bob").is_followed_by("alice"));

    SocialGraph::new(&mut world.directory)
        .unfollow(&email("alice"), &email("bob"))
        .unwrap();
    assert_eq!(lists(&world, "alice"), alice_before);
    assert_eq!(lists(&world, "bob"), bob_before);
}

#[test]
fn repeated_follows_are_counted_twice() {
    let mut world = World::with_users(&["alice", "bob"]);
    world.follow("alice", "bob");
    world.follow("alice", "bob");
    assert_eq!(world.account("alice").following(), ["bob", "bob"]);
    assert_eq!(world.account("bob").followers().len(), 2);

    SocialGraph::new(&mut world.directory)
        .unfollow(&email("alice"), &email("bob"))
        .unwrap();
    assert_eq!(world.account("alice").following(), ["bob"]);
}

#[test]
fn follow_requires_known_distinct_accounts() {
    let mut world = World::with_users(&["alice"]);
    let mut graph = SocialGraph::new(&mut world.directory);
    assert_eq!(
        graph.follow(&email("alice"), "ghost@example.com").unwrap_err(),
        AppError::NoSuchAccount
    );
    assert_eq!(
        graph.follow(&email("alice"), &email("alice")).unwrap_err(),
        AppError::SelfFollow
    );
}

#[test]
fn app_follow_actions_need_a_session() {
    let mut app = app_with_users(&["bob", "alice"]);

    assert!(app.toggle_follow("bob").unwrap());
    assert!(app.current_user().unwrap().follows("bob"));
    assert!(!app.toggle_follow("bob").unwrap());
    assert_eq!(app.toggle_follow("ghost").unwrap_err(), AppError::NoSuchUser);

    app.log_out();
    assert_eq!(app.follow(&email("bob")).unwrap_err(), AppError::NotLoggedIn);
    assert_eq!(app.toggle_follow("bob").unwrap_err(), AppError::NotLoggedIn);
}
