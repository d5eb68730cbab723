//! # Feed search
//!
//! A search string selects posts in two layers:
//!
//! 1. **Scope**, picked from the markers found by [`ParsedQuery::parse`], in
//!    this precedence order:
//!
//! | Marker          | Scope                                          | Info panel                  |
//! |-----------------|------------------------------------------------|-----------------------------|
//! | standalone `*`  | whole feed (`from:` ignored)                   | image count                 |
//! | `from:<user>`   | posts whose author is exactly `<user>`         | profile of `<user>`         |
//! | `""` exactly    | current account and everyone it follows        | current account's profile   |
//! | anything else   | whole feed                                     | image count                 |
//!
//! 2. **Keywords**: every remaining lowercased word narrows the scope to posts
//!    whose description contains it. Matching is case-sensitive unless
//!    [`SearchOptions::case_insensitive_keywords`] is set, so an uppercase
//!    description never matches a typed keyword by default.
//!
//! The current account is needed for the `from:` and empty-query scopes; those
//! fail with [`AppError::NotLoggedIn`] without one.

mod query;

pub use query::ParsedQuery;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    directory::UserDirectory,
    errors::{AppError, AppResult},
    feed::Feed,
    models::{Account, Post},
    views::{DisplayInfo, EMPTY_QUERY_LABEL, PostCard, ProfileSummary, SearchView},
};

/// Tunables for keyword matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Compare keywords against lowercased descriptions.
    #[serde(default)]
    pub case_insensitive_keywords: bool,
}

/// Which posts a query starts from, before keyword narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Author(String),
    Home,
}

impl Scope {
    fn of(parsed: &ParsedQuery) -> Self {
        if parsed.wild {
            Scope::All
        } else if let Some(from) = &parsed.from {
            Scope::Author(from.clone())
        } else if parsed.empty {
            Scope::Home
        } else {
            Scope::All
        }
    }
}

/// Posts selected by a search plus the info panel for them.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// Matching posts, newest first.
    pub posts: Vec<&'a Post>,
    pub info: DisplayInfo,
    /// Trimmed query text, `None` when nothing was typed.
    pub query_echo: Option<String>,
}

impl SearchOutcome<'_> {
    pub fn to_view(&self) -> SearchView {
        SearchView {
            query: self
                .query_echo
                .clone()
                .unwrap_or_else(|| EMPTY_QUERY_LABEL.to_string()),
            info_text: self.info.to_string(),
            follow_action: self.info.follow_action(),
            info: self.info.clone(),
            posts: self.posts.iter().map(|post| PostCard::from(*post)).collect(),
        }
    }
}

/// Read-only view of the state a search runs against.
pub struct QueryEngine<'a> {
    feed: &'a Feed,
    directory: &'a UserDirectory,
    current: Option<&'a Account>,
    options: SearchOptions,
}

impl<'a> QueryEngine<'a> {
    pub fn new(feed: &'a Feed, directory: &'a UserDirectory, current: Option<&'a Account>) -> Self {
        Self {
            feed,
            directory,
            current,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn search(&self, raw: &str) -> AppResult<SearchOutcome<'a>> {
        let parsed = ParsedQuery::parse(raw);
        let scope = Scope::of(&parsed);
        debug!("search {raw:?} -> {scope:?}, keywords {:?}", parsed.keywords);

        let mut posts: Vec<&'a Post> = match &scope {
            Scope::All => self.feed.all().collect(),
            Scope::Author(author) => {
                self.require_current()?;
                self.feed.all().filter(|post| &post.author == author).collect()
            }
            Scope::Home => {
                let current = self.require_current()?;
                self.feed
                    .all()
                    .filter(|post| post.author == current.username || current.follows(&post.author))
                    .collect()
            }
        };

        for keyword in parsed.effective_keywords() {
            posts.retain(|post| self.matches_keyword(post, keyword));
        }

        let info = match &scope {
            Scope::All => DisplayInfo::Count { total: posts.len() },
            Scope::Author(author) => self.author_info(author)?,
            Scope::Home => DisplayInfo::OwnProfile {
                profile: ProfileSummary::from(self.require_current()?),
            },
        };

        let trimmed = raw.trim();
        Ok(SearchOutcome {
            posts,
            info,
            query_echo: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        })
    }

    fn matches_keyword(&self, post: &Post, keyword: &str) -> bool {
        if self.options.case_insensitive_keywords {
            post.description.to_lowercase().contains(keyword)
        } else {
            post.description.contains(keyword)
        }
    }

    fn author_info(&self, author: &str) -> AppResult<DisplayInfo> {
        let current = self.require_current()?;
        if author == current.username {
            return Ok(DisplayInfo::OwnProfile {
                profile: ProfileSummary::from(current),
            });
        }
        Ok(match self.directory.find_by_username(author) {
            Some(account) => DisplayInfo::Profile {
                profile: ProfileSummary::from(account),
                is_followed_by_current: current.follows(author),
                follows_current: account.follows(&current.username),
            },
            None => DisplayInfo::NoSuchUser {
                username: author.to_string(),
            },
        })
    }

    fn require_current(&self) -> AppResult<&'a Account> {
        self.current.ok_or(AppError::NotLoggedIn)
    }
}
