//! Generation pipeline: prompt construction, planning, and dispatch.

pub mod batch;
pub mod prompt;

pub use batch::{plan, run, BatchPlan, BatchReport, PendingStory, DEFAULT_CONCURRENCY};
pub use prompt::{build_prompt, parse_response, GeneratedContent};
