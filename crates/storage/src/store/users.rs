#![forbid(unsafe_code)]

use super::{SqliteStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let found = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE username = ?1 AND password = ?2",
                params![username, password],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Returns `Ok(false)` when the username is already taken.
    pub fn register_user(&mut self, username: &str, password: &str) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let inserted = tx.execute(
            "INSERT INTO users(username, password) VALUES (?1, ?2)",
            params![username, password],
        );
        match inserted {
            Ok(_) => {
                tx.commit()?;
                log::debug!("registered user '{username}'");
                Ok(true)
            }
            Err(err) if super::is_constraint_violation(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Inserts the given account when the users table is empty. Returns
    /// whether the row was written.
    pub fn ensure_seed_account(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let users: i64 = tx.query_row("SELECT COUNT(1) FROM users", [], |row| row.get(0))?;
        if users > 0 {
            return Ok(false);
        }

        tx.execute(
            "INSERT INTO users(username, password) VALUES (?1, ?2)",
            params![username, password],
        )?;
        tx.commit()?;

        log::warn!("seeded default account '{username}' with a plaintext password");
        Ok(true)
    }
}
