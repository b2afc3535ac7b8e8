#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A stored idea row. `created_at` is set once at insertion; `updated_at`
/// moves on every edit. Both use the same minute-resolution text stamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: String,
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) fn idea_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Idea> {
    Ok(Idea {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        tags: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
