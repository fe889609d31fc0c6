//! Provider interfaces for external text-generation services.

pub mod anthropic;

use anyhow::Result;
use async_trait::async_trait;

pub use anthropic::AnthropicClient;

/// Trait for text-generation providers.
///
/// One call per story; the pipeline treats any error as a per-story
/// failure. Implemented by the real HTTP client and by test doubles.
#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Run a single completion for the given prompt, returning raw text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
