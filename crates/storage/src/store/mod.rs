#![forbid(unsafe_code)]

mod error;
mod ideas;
mod requests;
mod types;
mod users;

pub use error::StoreError;
pub use requests::{IdeaDraft, IdeaFilter};
pub use types::Idea;

use rusqlite::{Connection, ErrorCode};
use std::path::Path;
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::format_description;

const DB_FILE: &str = "ideas.db";

pub const SEED_USERNAME: &str = "zyz";
pub const SEED_PASSWORD: &str = "123456";

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref();
        std::fs::create_dir_all(storage_dir)?;

        let conn = Connection::open(storage_dir.join(DB_FILE))?;
        conn.busy_timeout(Duration::from_secs(5))?;

        install_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        install_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS ideas (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          category TEXT NOT NULL,
          description TEXT NOT NULL,
          tags TEXT,
          created_at TEXT NOT NULL,
          updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          username TEXT UNIQUE NOT NULL,
          password TEXT NOT NULL
        );
        "#,
    )?;
    log::debug!("schema installed");
    Ok(())
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(code, message) => {
            code.code == ErrorCode::ConstraintViolation
                || message
                    .as_deref()
                    .is_some_and(|value| value.contains("UNIQUE constraint failed"))
        }
        _ => false,
    }
}

// Zero-padded UTC stamp at minute resolution; ORDER BY on the text column
// relies on this sorting like time.
fn now_stamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| "1970-01-01 00:00".to_string())
}
