#![forbid(unsafe_code)]

mod auth;
mod categories;
mod error;
mod ideas;

pub use categories::CategoryRemoval;
pub use error::SessionError;

use gib_core::categories::CategorySet;
use gib_core::labels;
use gib_storage::{SEED_PASSWORD, SEED_USERNAME, SqliteStore};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

impl Default for SeedAccount {
    fn default() -> Self {
        Self {
            username: SEED_USERNAME.to_string(),
            password: SEED_PASSWORD.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Labels the session starts with; `uncategorized` is always kept.
    pub categories: Vec<String>,
    /// Account written on first start, when the users table is still empty.
    pub seed_account: SeedAccount,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            categories: labels::DEFAULT_LABELS
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
            seed_account: SeedAccount::default(),
        }
    }
}

/// One working session over the idea store: the open database, the
/// session-scoped category labels, and the signed-in user. Categories are
/// not persisted; every session starts from the configured list.
#[derive(Debug)]
pub struct Session {
    store: SqliteStore,
    categories: CategorySet,
    user: Option<String>,
}

impl Session {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        Self::open_with(storage_dir, SessionConfig::default())
    }

    pub fn open_with(
        storage_dir: impl AsRef<Path>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        Self::init(SqliteStore::open(storage_dir)?, config)
    }

    pub fn open_in_memory() -> Result<Self, SessionError> {
        Self::init(SqliteStore::open_in_memory()?, SessionConfig::default())
    }

    pub fn open_in_memory_with(config: SessionConfig) -> Result<Self, SessionError> {
        Self::init(SqliteStore::open_in_memory()?, config)
    }

    fn init(mut store: SqliteStore, config: SessionConfig) -> Result<Self, SessionError> {
        let SessionConfig {
            categories,
            seed_account,
        } = config;

        store.ensure_seed_account(&seed_account.username, &seed_account.password)?;
        let categories = CategorySet::seeded(categories)?;

        Ok(Self {
            store,
            categories,
            user: None,
        })
    }
}
