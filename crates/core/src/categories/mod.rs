#![forbid(unsafe_code)]

use crate::labels;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryError {
    Empty,
    Reserved(String),
    Duplicate(String),
    Unknown(String),
}

impl CategorySet {
    pub fn default_set() -> Self {
        Self {
            labels: labels::DEFAULT_LABELS
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
        }
    }

    /// Builds a set from caller-supplied labels. The `uncategorized` label is
    /// always present afterwards; it is the reassignment target for removals.
    pub fn seeded<I, S>(seed: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { labels: Vec::new() };
        for label in seed {
            set.add(&label.into())?;
        }
        if !set.contains(labels::UNCATEGORIZED) {
            set.labels.insert(0, labels::UNCATEGORIZED.to_string());
        }
        Ok(set)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels with the `all` sentinel prepended, for filter pickers.
    pub fn list(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.labels.len() + 1);
        out.push(labels::ALL_SENTINEL.to_string());
        out.extend(self.labels.iter().cloned());
        out
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|have| have == label)
    }

    pub fn add(&mut self, label: &str) -> Result<(), CategoryError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CategoryError::Empty);
        }
        if labels::is_all_sentinel(label) {
            return Err(CategoryError::Reserved(label.to_string()));
        }
        let folded = label.to_lowercase();
        if let Some(existing) = self
            .labels
            .iter()
            .find(|have| have.to_lowercase() == folded)
        {
            return Err(CategoryError::Duplicate(existing.clone()));
        }
        self.labels.push(label.to_string());
        Ok(())
    }

    pub fn remove(&mut self, label: &str) -> Result<(), CategoryError> {
        if labels::is_protected(label) {
            return Err(CategoryError::Reserved(label.to_string()));
        }
        let Some(position) = self.labels.iter().position(|have| have == label) else {
            return Err(CategoryError::Unknown(label.to_string()));
        };
        self.labels.remove(position);
        Ok(())
    }
}

impl std::fmt::Display for CategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "category name is empty"),
            Self::Reserved(label) => write!(f, "category name '{label}' is reserved"),
            Self::Duplicate(label) => write!(f, "category '{label}' already exists"),
            Self::Unknown(label) => write!(f, "unknown category '{label}'"),
        }
    }
}

impl std::error::Error for CategoryError {}

#[cfg(test)]
mod tests;
