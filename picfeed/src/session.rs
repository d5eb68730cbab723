//! The single process-wide login session.

use log::{debug, info};

use crate::{
    directory::UserDirectory,
    errors::{AppError, AppResult},
    models::Account,
};

/// Tracks which account, if any, is logged in.
///
/// Holds the account's email, never the account itself.
#[derive(Debug, Default, Clone)]
pub struct SessionManager {
    current_email: Option<String>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in, replacing any existing session.
    ///
    /// A failed attempt leaves the previous session in place.
    pub fn log_in<'a>(&mut self, directory: &'a UserDirectory, email: &str, password: &str) -> AppResult<&'a Account> {
        let account = directory.find_by_email(email).ok_or(AppError::NoSuchAccount)?;
        if account.password != password {
            debug!("login rejected for {email}: incorrect password");
            return Err(AppError::IncorrectPassword);
        }
        if let Some(previous) = self.current_email.as_deref() {
            debug!("replacing session of {previous}");
        }
        info!("{} logged in", account.username);
        self.current_email = Some(account.email.clone());
        Ok(account)
    }

    /// Starts a session for an account that was just created.
    pub(crate) fn start(&mut self, email: impl Into<String>) {
        self.current_email = Some(email.into());
    }

    /// Clears the session, whether or not one was active.
    pub fn log_out(&mut self) {
        if let Some(email) = self.current_email.take() {
            info!("{email} logged out");
        }
    }

    pub fn current<'a>(&self, directory: &'a UserDirectory) -> Option<&'a Account> {
        self.current_email.as_deref().and_then(|email| directory.find_by_email(email))
    }

    pub fn current_email(&self) -> Option<&str> {
        self.current_email.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_email.is_some()
    }
}
