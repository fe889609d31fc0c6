//! Core data structures: story documents, slugs, and the topic catalog.

pub mod slug;
pub mod story;
pub mod topics;

pub use slug::{slugify, SlugSet};
pub use story::{Article, Category, CefrLevel, Sentence, Story, StoryMeta, VocabWord, WordClass};
pub use topics::{TopicSpec, CATALOG};
