//! lesestoff - batch generator for graded German reading stories
//!
//! Maintains a filesystem library of short German stories, one JSON
//! document per slug, produced by a text-generation provider from a
//! static topic catalog.
//!
//! # Architecture
//!
//! The pipeline is built for safe re-runs:
//! - Planning is side-effect free: slugs are deduplicated and ids fixed
//!   before any network call
//! - Topics whose slug already exists are skipped, so an interrupted
//!   batch resumes where it left off
//! - A fixed worker pool bounds concurrent provider calls; one story's
//!   failure never cancels its siblings
//! - The summary index is derived data, rebuilt whole after every batch
//!
//! # Modules
//!
//! - `adapters`: Generation provider integrations (Anthropic)
//! - `core`: Pipeline logic (prompting, planning, dispatch)
//! - `domain`: Data structures (Story, TopicSpec, slugs)
//! - `library`: Persistence (StoryStore, summary index)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate everything still missing from the store
//! lesestoff generate
//!
//! # Verify the provider works with a single story
//! lesestoff generate --test
//!
//! # Rebuild the summary index
//! lesestoff rebuild-index
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::adapters::{AnthropicClient, StoryProvider};
pub use crate::core::{plan, run, BatchPlan, BatchReport, PendingStory};
pub use crate::domain::{Category, CefrLevel, Story, StoryMeta, TopicSpec, CATALOG};
pub use crate::library::{StoreError, StoryStore};
