#![forbid(unsafe_code)]

mod store;

pub use store::{
    Idea, IdeaDraft, IdeaFilter, SEED_PASSWORD, SEED_USERNAME, SqliteStore, StoreError,
};
