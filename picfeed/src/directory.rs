//! Registered accounts.

use log::{debug, info};

use crate::{
    errors::{AppError, AppResult},
    models::Account,
};

/// Owns every account, in registration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account with empty follow lists.
    ///
    /// The email is checked before the username, and the username is
    /// lowercased before its uniqueness check. Nothing is inserted on failure.
    pub fn create_account(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> AppResult<&Account> {
        let account = Account::new(email, password, name, username);
        self.check_available(&account.email, &account.username)?;

        info!("registered account {} <{}>", account.username, account.email);
        self.accounts.push(account);
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Fails with the uniqueness error `create_account` would report.
    /// `username` is compared lowercased.
    pub fn check_available(&self, email: &str, username: &str) -> AppResult<()> {
        if self.exists(email) {
            debug!("signup rejected, email {email} already registered");
            return Err(AppError::EmailTaken);
        }
        let username = username.to_lowercase();
        if self.find_by_username(&username).is_some() {
            debug!("signup rejected, username {username} already registered");
            return Err(AppError::UsernameTaken);
        }
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Accounts in registration order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub(crate) fn position_by_email(&self, email: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.email == email)
    }

    /// Mutable access to two distinct accounts at once.
    pub(crate) fn pair_mut(&mut self, first: usize, second: usize) -> (&mut Account, &mut Account) {
        debug_assert_ne!(first, second);
        if first < second {
            let (head, tail) = self.accounts.split_at_mut(second);
            (&mut head[first], &mut tail[0])
        } else {
            let (head, tail) = self.accounts.split_at_mut(first);
            (&mut tail[0], &mut head[second])
        }
    }
}
