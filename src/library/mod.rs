//! Persistence layer: the story store and its derived summary index.

pub mod meta;
pub mod store;

pub use store::{StoreError, StoryStore};
