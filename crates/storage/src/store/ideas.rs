#![forbid(unsafe_code)]

use super::types::idea_from_row;
use super::{Idea, IdeaDraft, IdeaFilter, SqliteStore, StoreError};
use gib_core::labels;
use rusqlite::{OptionalExtension, params, params_from_iter};

impl SqliteStore {
    pub fn create_idea(&mut self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let IdeaDraft {
            title,
            category,
            description,
            tags,
        } = draft;

        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let now = super::now_stamp();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO ideas(title, category, description, tags, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![title, category, description, tags, now],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        log::debug!("created idea {id} in category '{category}'");
        Ok(Idea {
            id,
            title,
            category,
            description,
            tags,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn get_idea(&self, id: i64) -> Result<Option<Idea>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, title, category, description, tags, created_at, updated_at \
                 FROM ideas WHERE id = ?1",
                params![id],
                idea_from_row,
            )
            .optional()?)
    }

    pub fn list_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        self.filter_ideas(IdeaFilter::default())
    }

    pub fn filter_ideas(&self, filter: IdeaFilter) -> Result<Vec<Idea>, StoreError> {
        let IdeaFilter { category, search } = filter;

        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        let category =
            category.filter(|value| !value.is_empty() && !labels::is_all_sentinel(value));
        if let Some(category) = category {
            clauses.push("category = ?");
            args.push(category);
        }

        let search = search.filter(|value| !value.is_empty());
        if let Some(search) = search {
            clauses.push("(title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')");
            let pattern = like_pattern(&search);
            args.push(pattern.clone());
            args.push(pattern);
        }

        let mut sql = String::from(
            "SELECT id, title, category, description, tags, created_at, updated_at FROM ideas",
        );
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(args))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(idea_from_row(row)?);
        }
        Ok(out)
    }

    pub fn update_idea(&mut self, id: i64, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let IdeaDraft {
            title,
            category,
            description,
            tags,
        } = draft;

        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let now = super::now_stamp();
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE ideas SET title = ?1, category = ?2, description = ?3, tags = ?4, updated_at = ?5 \
             WHERE id = ?6",
            params![title, category, description, tags, now, id],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        let idea = tx.query_row(
            "SELECT id, title, category, description, tags, created_at, updated_at \
             FROM ideas WHERE id = ?1",
            params![id],
            idea_from_row,
        )?;
        tx.commit()?;

        log::debug!("updated idea {id}");
        Ok(idea)
    }

    pub fn delete_idea(&mut self, id: i64) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM ideas WHERE id = ?1", params![id])?;
        tx.commit()?;

        if deleted > 0 {
            log::debug!("deleted idea {id}");
        }
        Ok(deleted > 0)
    }

    pub fn delete_ideas_in(&mut self, category: &str) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM ideas WHERE category = ?1", params![category])?;
        tx.commit()?;

        log::debug!("deleted {deleted} ideas in category '{category}'");
        Ok(deleted)
    }

    // Leaves updated_at alone: moving a whole category is bookkeeping, not an
    // edit of the ideas themselves.
    pub fn reassign_ideas(
        &mut self,
        old_category: &str,
        new_category: &str,
    ) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let moved = tx.execute(
            "UPDATE ideas SET category = ?1 WHERE category = ?2",
            params![new_category, old_category],
        )?;
        tx.commit()?;

        log::debug!("moved {moved} ideas from '{old_category}' to '{new_category}'");
        Ok(moved)
    }

    pub fn count_ideas_in(&self, category: &str) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM ideas WHERE category = ?1",
            params![category],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}
