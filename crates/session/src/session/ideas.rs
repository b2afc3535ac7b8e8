#![forbid(unsafe_code)]

use super::{Session, SessionError};
use gib_storage::{Idea, IdeaDraft, IdeaFilter};

impl Session {
    /// Stores a new idea. The draft's category must be one of the session's
    /// current labels.
    pub fn create_idea(&mut self, draft: IdeaDraft) -> Result<Idea, SessionError> {
        if !self.categories.contains(&draft.category) {
            return Err(SessionError::InvalidArgument(format!(
                "category '{}' is not in the current set",
                draft.category
            )));
        }
        Ok(self.store.create_idea(draft)?)
    }

    pub fn get_idea(&self, id: i64) -> Result<Option<Idea>, SessionError> {
        Ok(self.store.get_idea(id)?)
    }

    pub fn list_ideas(&self) -> Result<Vec<Idea>, SessionError> {
        Ok(self.store.list_ideas()?)
    }

    pub fn filter_ideas(&self, filter: IdeaFilter) -> Result<Vec<Idea>, SessionError> {
        Ok(self.store.filter_ideas(filter)?)
    }

    /// Full replace of the stored fields. Besides the current labels, the
    /// idea's own stored category stays acceptable, so a record whose label
    /// vanished with an earlier session can still be re-saved.
    pub fn update_idea(&mut self, id: i64, draft: IdeaDraft) -> Result<Idea, SessionError> {
        if !self.categories.contains(&draft.category) {
            let current = self.store.get_idea(id)?.ok_or(SessionError::IdeaNotFound)?;
            if current.category != draft.category {
                return Err(SessionError::InvalidArgument(format!(
                    "category '{}' is not in the current set",
                    draft.category
                )));
            }
        }
        Ok(self.store.update_idea(id, draft)?)
    }

    pub fn delete_idea(&mut self, id: i64) -> Result<bool, SessionError> {
        Ok(self.store.delete_idea(id)?)
    }
}
