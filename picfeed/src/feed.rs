//! The shared image feed.

use std::collections::VecDeque;

use log::debug;

use crate::{
    errors::{AppError, AppResult},
    models::{Account, Post},
};

/// Every published post, newest first.
#[derive(Debug, Default, Clone)]
pub struct Feed {
    posts: VecDeque<Post>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a post as `author`, placing it at the front of the feed.
    pub fn publish(
        &mut self,
        author: Option<&Account>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> AppResult<&Post> {
        let author = author.ok_or(AppError::NotLoggedIn)?;
        let post = Post::new(author.username.clone(), url, description);
        debug!("{} published {} ({})", post.author, post.id, post.url);
        self.posts.push_front(post);
        Ok(&self.posts[0])
    }

    /// Posts in newest-first order.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &Post> + ExactSizeIterator {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
