//! Plain data records handed to a renderer.
//!
//! Nothing here knows about markup. The `Display` impls produce the exact
//! text a renderer shows in the info panel above the image grid.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::models::{Account, Post};

/// Shown above the grid when the query trims to nothing.
pub const EMPTY_QUERY_LABEL: &str = "None";

/// Follow counts and identity of one account.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub name: Option<String>,
    pub following: usize,
    pub followers: usize,
}

impl From<&Account> for ProfileSummary {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            name: account.name.clone(),
            following: account.following().len(),
            followers: account.followers().len(),
        }
    }
}

/// What the info panel shows for a search.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayInfo {
    /// Number of matching images.
    Count { total: usize },
    /// The logged-in account's own profile.
    OwnProfile { profile: ProfileSummary },
    /// Another account's profile, relative to the logged-in account.
    Profile {
        profile: ProfileSummary,
        is_followed_by_current: bool,
        follows_current: bool,
    },
    /// A `from:` filter named an unknown username.
    NoSuchUser { username: String },
}

impl DisplayInfo {
    /// The follow button a renderer should offer, if any.
    pub fn follow_action(&self) -> Option<FollowAction> {
        match self {
            DisplayInfo::Profile {
                profile,
                is_followed_by_current,
                ..
            } => Some(FollowAction {
                username: profile.username.clone(),
                label: if *is_followed_by_current { "Unfollow" } else { "Follow" }.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayInfo::Count { total: 0 } => write!(f, "No results."),
            DisplayInfo::Count { total } => write!(f, "{total} images"),
            DisplayInfo::OwnProfile { profile } => {
                writeln!(f, "Your profile:")?;
                writeln!(f, "Username: {}", profile.username)?;
                if let Some(name) = &profile.name {
                    writeln!(f, "Name: {name}")?;
                }
                writeln!(f, "Following: {}", profile.following)?;
                write!(f, "Followers: {}", profile.followers)
            }
            DisplayInfo::Profile {
                profile,
                follows_current,
                ..
            } => {
                writeln!(f, "Profile for {}:", profile.username)?;
                if let Some(name) = &profile.name {
                    writeln!(f, "Name: {name}")?;
                }
                if *follows_current {
                    writeln!(f, "{} follows you.", profile.username)?;
                }
                writeln!(f, "Following: {}", profile.following)?;
                write!(f, "Followers: {}", profile.followers)
            }
            DisplayInfo::NoSuchUser { .. } => write!(f, "No such user."),
        }
    }
}

/// Follow/Unfollow button on another account's profile.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowAction {
    pub username: String,
    pub label: String,
}

/// One image in the grid.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub id: String,
    pub author: String,
    pub url: String,
    pub description: String,
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            author: post.author.clone(),
            url: post.url.clone(),
            description: post.description.clone(),
            created_at: post.created_at,
        }
    }
}

/// Everything a renderer needs after a search.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchView {
    /// Query echo, or [`EMPTY_QUERY_LABEL`].
    pub query: String,
    pub info: DisplayInfo,
    pub info_text: String,
    pub follow_action: Option<FollowAction>,
    pub posts: Vec<PostCard>,
}
