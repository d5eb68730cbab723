#![allow(dead_code)]

pub use picfeed::{
    Account, App, AppConfig, AppError, DisplayInfo, Feed, Post, QueryEngine, SessionManager, SocialGraph,
    UserDirectory,
};
pub use std::time::{Duration, Instant};

pub fn email(username: &str) -> String {
    format!("{username}@example.com")
}

pub fn urls<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|post| post.url.as_str()).collect()
}

/// A directory and feed built directly from the library pieces.
pub struct World {
    pub directory: UserDirectory,
    pub feed: Feed,
}

impl World {
    pub fn with_users(usernames: &[&str]) -> Self {
        let mut directory = UserDirectory::new();
        for username in usernames {
            directory
                .create_account(email(username), "pw", "", *username)
                .expect("create account");
        }
        Self {
            directory,
            feed: Feed::new(),
        }
    }

    /// alice follows bob. Feed, newest first: bob u1 "cat pic", alice u2
    /// "dog pic", carol u3 "cat and dog".
    pub fn scenario() -> Self {
        let mut world = Self::with_users(&["alice", "bob", "carol"]);
        world.follow("alice", "bob");
        world.publish("carol", "u3", "cat and dog");
        world.publish("alice", "u2", "dog pic");
        world.publish("bob", "u1", "cat pic");
        world
    }

    pub fn account(&self, username: &str) -> &Account {
        self.directory.find_by_username(username).expect("known username")
    }

    pub fn follow(&mut self, actor: &str, target: &str) {
        SocialGraph::new(&mut self.directory)
            .follow(&email(actor), &email(target))
            .expect("follow");
    }

    pub fn publish(&mut self, author: &str, url: &str, description: &str) {
        let account = self.directory.find_by_username(author);
        self.feed.publish(account, url, description).expect("publish");
    }

    pub fn search(&self, current: Option<&str>, query: &str) -> Result<Vec<&str>, AppError> {
        let current = current.map(|username| self.account(username));
        let outcome = QueryEngine::new(&self.feed, &self.directory, current).search(query)?;
        Ok(urls(&outcome.posts))
    }
}

/// An app where each of `usernames` has signed up; the last one is logged in.
pub fn app_with_users(usernames: &[&str]) -> App {
    let mut app = App::new();
    for username in usernames {
        app.sign_up(&email(username), "pw", "", username).expect("sign up");
    }
    app
}
