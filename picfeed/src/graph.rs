//! Follow/unfollow mutations.
//!
//! A follow touches two accounts: the actor's `following` list and the
//! target's `followers` list. Both sides change together or not at all.

use log::debug;

use crate::{
    directory::UserDirectory,
    errors::{AppError, AppResult},
};

/// Mutable view over the directory's follow lists.
pub struct SocialGraph<'a> {
    directory: &'a mut UserDirectory,
}

impl<'a> SocialGraph<'a> {
    pub fn new(directory: &'a mut UserDirectory) -> Self {
        Self { directory }
    }

    /// `actor` starts following `target`.
    ///
    /// Repeats are not collapsed: following twice records the username twice.
    pub fn follow(&mut self, actor_email: &str, target_email: &str) -> AppResult<()> {
        let (actor, target) = self.resolve(actor_email, target_email)?;
        let (actor, target) = self.directory.pair_mut(actor, target);
        actor.following.push(target.username.clone());
        target.followers.push(actor.username.clone());
        debug!("{} now follows {}", actor.username, target.username);
        Ok(())
    }

    /// Removes one occurrence of the follow from both sides. Missing entries are ignored.
    pub fn unfollow(&mut self, actor_email: &str, target_email: &str) -> AppResult<()> {
        let (actor, target) = self.resolve(actor_email, target_email)?;
        let (actor, target) = self.directory.pair_mut(actor, target);
        remove_first(&mut actor.following, &target.username);
        remove_first(&mut target.followers, &actor.username);
        debug!("{} unfollowed {}", actor.username, target.username);
        Ok(())
    }

    /// Follows when not following yet, otherwise unfollows. Returns whether
    /// `actor` follows `target` afterwards.
    pub fn toggle(&mut self, actor_email: &str, target_email: &str) -> AppResult<bool> {
        if self.is_following(actor_email, target_email)? {
            self.unfollow(actor_email, target_email)?;
        } else {
            self.follow(actor_email, target_email)?;
        }
        self.is_following(actor_email, target_email)
    }

    pub fn is_following(&self, actor_email: &str, target_email: &str) -> AppResult<bool> {
        let actor = self
            .directory
            .find_by_email(actor_email)
            .ok_or(AppError::NoSuchAccount)?;
        let target = self
            .directory
            .find_by_email(target_email)
            .ok_or(AppError::NoSuchAccount)?;
        Ok(actor.follows(&target.username))
    }

    fn resolve(&self, actor_email: &str, target_email: &str) -> AppResult<(usize, usize)> {
        let actor = self
            .directory
            .position_by_email(actor_email)
            .ok_or(AppError::NoSuchAccount)?;
        let target = self
            .directory
            .position_by_email(target_email)
            .ok_or(AppError::NoSuchAccount)?;
        if actor == target {
            return Err(AppError::SelfFollow);
        }
        Ok((actor, target))
    }
}

fn remove_first(list: &mut Vec<String>, username: &str) {
    if let Some(index) = list.iter().position(|u| u == username) {
        list.remove(index);
    }
}
