//! Account and post records.
//!
//! Both are plain data owned by their collections ([`crate::UserDirectory`] and
//! [`crate::Feed`]). Accounts expose their follow lists read-only; only the
//! social graph mutates them.

use chrono::{DateTime, Utc};

use crate::id::generate_post_id;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique key, compared exactly.
    pub email: String,
    /// Stored and compared in plain text.
    pub password: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Unique key, lowercased at creation.
    pub username: String,
    pub(crate) following: Vec<String>,
    pub(crate) followers: Vec<String>,
}

impl Account {
    pub(crate) fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            email: email.into(),
            password: password.into(),
            name: (!name.is_empty()).then_some(name),
            username: username.into().to_lowercase(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Usernames this account follows, in follow order. May contain repeats.
    pub fn following(&self) -> &[String] {
        &self.following
    }

    /// Usernames following this account, in follow order. May contain repeats.
    pub fn followers(&self) -> &[String] {
        &self.followers
    }

    pub fn follows(&self, username: &str) -> bool {
        self.following.iter().any(|u| u == username)
    }

    pub fn is_followed_by(&self, username: &str) -> bool {
        self.followers.iter().any(|u| u == username)
    }
}

/// A shared image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    /// Username of the publishing account.
    pub author: String,
    pub url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(author: impl Into<String>, url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: generate_post_id(),
            author: author.into(),
            url: url.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
