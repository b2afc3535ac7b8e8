#![forbid(unsafe_code)]

mod session;

pub use gib_core::categories::{CategoryError, CategorySet};
pub use gib_core::cleanup::CleanupStrategy;
pub use gib_storage::{Idea, IdeaDraft, IdeaFilter, StoreError};
pub use session::{CategoryRemoval, SeedAccount, Session, SessionConfig, SessionError};
