//! Mock registration and login backed by a local user table.
//!
//! This is intentionally not real security: passwords are compared in plain
//! text, exactly like the browser application's local-storage user list. Its
//! only job is to produce the "current user" identifier the ledger engine
//! classifies debts by.

use crate::traits::UserStore;
use crate::types::*;
use crate::utils::validation::{validate_email, validate_password, validate_username};

/// Registration and login against a [`UserStore`]
pub struct Authenticator<S: UserStore> {
    storage: S,
}

impl<S: UserStore> Authenticator<S> {
    /// Create a new authenticator with the given user store
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Register a new user.
    ///
    /// Validates username, email, and password shape, and rejects any
    /// username or email already on file.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> SplitResult<User> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;

        if self
            .storage
            .find_by_username_or_email(username, email)
            .await?
            .is_some()
        {
            return Err(SplitError::UserExists(username.to_string()));
        }

        let user = User::new(
            username.to_string(),
            email.to_string(),
            password.to_string(),
        );
        self.storage.save_user(&user).await?;

        Ok(user)
    }

    /// Log a user in, returning their record on an exact credential match.
    ///
    /// A missing user and a wrong password both map to the same error, so
    /// callers cannot distinguish which part failed.
    pub async fn login(&self, username: &str, password: &str) -> SplitResult<User> {
        match self.storage.find_user(username).await? {
            Some(user) if user.password == password => Ok(user),
            _ => Err(SplitError::InvalidCredentials),
        }
    }
}

/// Rough password strength on a 0-3 scale, as shown by the signup meter
pub fn password_strength(password: &str) -> u8 {
    if password.is_empty() {
        0
    } else if password.len() < 6 {
        1
    } else if password.len() < 10 {
        2
    } else {
        3
    }
}
