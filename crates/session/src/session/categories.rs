#![forbid(unsafe_code)]

use super::{Session, SessionError};
use gib_core::cleanup::CleanupStrategy;
use gib_core::labels;

/// Outcome of a removal request that carries no cleanup choice yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryRemoval {
    Removed,
    /// The label still has ideas filed under it; nothing was changed. The
    /// caller picks a `CleanupStrategy` and calls `remove_category_with`.
    CleanupRequired { ideas: usize },
}

impl Session {
    pub fn categories(&self) -> &[String] {
        self.categories.labels()
    }

    /// Labels with the `all` sentinel prepended, for filter pickers.
    pub fn category_options(&self) -> Vec<String> {
        self.categories.list()
    }

    pub fn add_category(&mut self, label: &str) -> Result<(), SessionError> {
        self.categories.add(label)?;
        log::debug!("added category '{}'", label.trim());
        Ok(())
    }

    /// Removes an empty category outright. A category that still has ideas
    /// is left untouched and reported, so the caller can ask for a cleanup
    /// strategy first.
    pub fn remove_category(&mut self, label: &str) -> Result<CategoryRemoval, SessionError> {
        self.guard_removal(label)?;

        let ideas = self.store.count_ideas_in(label)?;
        if ideas > 0 {
            return Ok(CategoryRemoval::CleanupRequired { ideas });
        }

        self.categories.remove(label)?;
        log::info!("removed category '{label}'");
        Ok(CategoryRemoval::Removed)
    }

    /// Removes a category after running the chosen cleanup: either the
    /// filed ideas are deleted or they move to `uncategorized`. The label
    /// leaves the set only once the store-side cleanup has succeeded.
    /// Returns how many ideas the cleanup touched.
    pub fn remove_category_with(
        &mut self,
        label: &str,
        strategy: CleanupStrategy,
    ) -> Result<usize, SessionError> {
        self.guard_removal(label)?;

        let ideas = self.store.count_ideas_in(label)?;
        if ideas > 0 {
            match strategy {
                CleanupStrategy::DeleteIdeas => {
                    self.store.delete_ideas_in(label)?;
                }
                CleanupStrategy::ReassignToUncategorized => {
                    self.store.reassign_ideas(label, labels::UNCATEGORIZED)?;
                }
            }
        }

        self.categories.remove(label)?;
        log::info!(
            "removed category '{label}' ({} cleanup, {ideas} ideas)",
            strategy.as_str()
        );
        Ok(ideas)
    }

    fn guard_removal(&self, label: &str) -> Result<(), SessionError> {
        if labels::is_protected(label) {
            return Err(SessionError::InvalidArgument(format!(
                "category '{label}' cannot be removed"
            )));
        }
        if !self.categories.contains(label) {
            return Err(SessionError::UnknownCategory(label.to_string()));
        }
        Ok(())
    }
}
