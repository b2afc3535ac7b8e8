#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeaFilter {
    /// Exact category to keep; `None` or the `all` sentinel keeps everything.
    pub category: Option<String>,
    /// Case-insensitive substring looked up in title and description.
    pub search: Option<String>,
}

impl IdeaFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    pub fn by_search(search: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(search.into()),
        }
    }
}
