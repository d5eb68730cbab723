//! Application state and the in-process API a UI drives.
//!
//! One [`App`] is created at startup and passed to whatever handles user
//! events. Every method runs to completion and either applies its whole
//! mutation or none of it.

use std::time::Instant;

use log::{debug, warn};

use crate::{
    config::AppConfig,
    directory::UserDirectory,
    errors::{AppError, AppResult},
    feed::Feed,
    graph::SocialGraph,
    models::{Account, Post},
    notice::NoticeBoard,
    search::{QueryEngine, SearchOutcome},
    session::SessionManager,
};

#[derive(Debug, Clone, Default)]
pub struct App {
    config: AppConfig,
    directory: UserDirectory,
    session: SessionManager,
    feed: Feed,
    notices: NoticeBoard,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            notices: NoticeBoard::new(config.notices.display_for()),
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    // ========== Auth ==========

    /// Registers an account and logs it in.
    ///
    /// Uniqueness is checked before the configured validation policy, so a
    /// taken email is always reported as [`AppError::EmailTaken`].
    ///
    /// Logging in happens even when another account is already logged in;
    /// the new account replaces it.
    pub fn sign_up(&mut self, email: &str, password: &str, name: &str, username: &str) -> AppResult<&Account> {
        self.sign_up_at(email, password, name, username, Instant::now())
    }

    pub fn sign_up_at(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        username: &str,
        now: Instant,
    ) -> AppResult<&Account> {
        let created = self
            .directory
            .check_available(email, username)
            .and_then(|()| self.config.validation.check_signup(email, username).map_err(AppError::from))
            .and_then(|()| {
                self.directory
                    .create_account(email, password, name, username)
                    .map(|account| account.email.clone())
            });

        match created {
            Ok(registered) => {
                self.session.start(registered);
                self.notices.clear();
                self.current_user().ok_or(AppError::NotLoggedIn)
            }
            Err(err) => {
                warn!("signup failed for {email}: {err}");
                self.notices.post(err.to_string(), now);
                Err(err)
            }
        }
    }

    pub fn log_in(&mut self, email: &str, password: &str) -> AppResult<&Account> {
        self.log_in_at(email, password, Instant::now())
    }

    /// Logs in. A failure posts its message to the notice board and leaves
    /// the current session untouched.
    pub fn log_in_at(&mut self, email: &str, password: &str, now: Instant) -> AppResult<&Account> {
        match self.session.log_in(&self.directory, email, password) {
            Ok(account) => {
                self.notices.clear();
                Ok(account)
            }
            Err(err) => {
                warn!("login failed for {email}: {err}");
                self.notices.post(err.to_string(), now);
                Err(err)
            }
        }
    }

    pub fn log_out(&mut self) {
        self.session.log_out();
    }

    pub fn current_user(&self) -> Option<&Account> {
        self.session.current(&self.directory)
    }

    /// The pending auth error message, if still visible.
    pub fn notice(&self, now: Instant) -> Option<&str> {
        self.notices.current(now)
    }

    // ========== Social ==========

    /// The current account follows the account registered under `email`.
    pub fn follow(&mut self, email: &str) -> AppResult<()> {
        let actor = self.current_email()?;
        SocialGraph::new(&mut self.directory).follow(&actor, email)
    }

    /// The current account stops following the account registered under `email`.
    pub fn unfollow(&mut self, email: &str) -> AppResult<()> {
        let actor = self.current_email()?;
        SocialGraph::new(&mut self.directory).unfollow(&actor, email)
    }

    /// Follow/Unfollow button handler. Returns whether the current account
    /// follows `username` afterwards.
    pub fn toggle_follow(&mut self, username: &str) -> AppResult<bool> {
        let actor = self.current_email()?;
        let target = self
            .directory
            .find_by_username(username)
            .map(|account| account.email.clone())
            .ok_or(AppError::NoSuchUser)?;
        SocialGraph::new(&mut self.directory).toggle(&actor, &target)
    }

    // ========== Content ==========

    /// Publishes an image as the current account.
    pub fn add_pic(&mut self, url: &str, description: &str) -> AppResult<&Post> {
        let author = self.session.current(&self.directory).ok_or(AppError::NotLoggedIn)?;
        self.config.validation.check_post(url)?;
        self.feed.publish(Some(author), url, description)
    }

    // ========== Query ==========

    pub fn search(&self, query: &str) -> AppResult<SearchOutcome<'_>> {
        QueryEngine::new(&self.feed, &self.directory, self.current_user())
            .with_options(self.config.search)
            .search(query)
    }

    /// Usernames in registration order, for a user picker.
    pub fn users(&self) -> Vec<&str> {
        self.directory.accounts().map(|a| a.username.as_str()).collect()
    }

    fn current_email(&self) -> AppResult<String> {
        let email = self
            .current_user()
            .map(|account| account.email.clone())
            .ok_or(AppError::NotLoggedIn)?;
        debug!("acting as {email}");
        Ok(email)
    }
}
