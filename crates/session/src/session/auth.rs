#![forbid(unsafe_code)]

use super::{Session, SessionError};

impl Session {
    /// Checks the pair against the users table and remembers the user on
    /// success. A failed attempt leaves any current sign-in untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool, SessionError> {
        if self.store.verify_credentials(username, password)? {
            self.user = Some(username.to_string());
            log::info!("user '{username}' signed in");
            return Ok(true);
        }
        Ok(false)
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns `Ok(false)` when the username is already taken.
    pub fn register(&mut self, username: &str, password: &str) -> Result<bool, SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::Validation("username is required"));
        }
        if password.is_empty() {
            return Err(SessionError::Validation("password is required"));
        }
        Ok(self.store.register_user(username, password)?)
    }
}
