#![forbid(unsafe_code)]

use gib_core::categories::CategoryError;
use gib_storage::StoreError;

#[derive(Debug)]
pub enum SessionError {
    Validation(&'static str),
    IdeaNotFound,
    UnknownCategory(String),
    Duplicate(String),
    InvalidArgument(String),
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "validation: {message}"),
            Self::IdeaNotFound => write!(f, "idea not found"),
            Self::UnknownCategory(label) => write!(f, "unknown category '{label}'"),
            Self::Duplicate(name) => write!(f, "'{name}' already exists"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Store(err) => write!(f, "store: {err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::EmptyTitle => Self::Validation("idea title is required"),
            StoreError::UnknownId => Self::IdeaNotFound,
            other => Self::Store(other),
        }
    }
}

impl From<CategoryError> for SessionError {
    fn from(value: CategoryError) -> Self {
        match value {
            CategoryError::Empty => Self::Validation("category name is required"),
            CategoryError::Reserved(label) => {
                Self::InvalidArgument(format!("category name '{label}' is reserved"))
            }
            CategoryError::Duplicate(label) => Self::Duplicate(label),
            CategoryError::Unknown(label) => Self::UnknownCategory(label),
        }
    }
}
