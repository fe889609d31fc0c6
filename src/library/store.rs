//! Filesystem story store: one pretty-printed JSON file per slug.
//!
//! Append-mostly by design. Within one batch a slug is claimed by exactly
//! one worker, so files are never rewritten concurrently; regeneration
//! means deleting the file and re-running.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::warn;

use crate::domain::Story;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Story not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Directory of slug-keyed story documents.
#[derive(Debug, Clone)]
pub struct StoryStore {
    dir: PathBuf,
}

impl StoryStore {
    /// Open the store, creating the directory if needed.
    ///
    /// An unreadable or uncreatable directory is fatal here, before any
    /// generation work starts.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        // Probe readability up front rather than mid-batch.
        fs::read_dir(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a slug.
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slug))
    }

    /// Whether a story with this slug is already persisted.
    pub fn exists(&self, slug: &str) -> bool {
        self.path_for(slug).exists()
    }

    /// Load a story by slug.
    pub async fn load(&self, slug: &str) -> Result<Story, StoreError> {
        let path = self.path_for(slug);
        if !path.exists() {
            return Err(StoreError::NotFound(slug.to_string()));
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist a story under its slug.
    pub async fn save(&self, story: &Story) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(story)?;
        fs::write(self.path_for(&story.slug), content).await?;
        Ok(())
    }

    /// All persisted slugs, sorted.
    pub async fn slugs(&self) -> Result<Vec<String>, StoreError> {
        let mut slugs = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(slug) = name.strip_suffix(".json") {
                slugs.push(slug.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Number of persisted stories.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.slugs().await?.len())
    }

    /// Next free id: one past the maximum id currently in the store.
    ///
    /// Unparseable files are skipped with a warning rather than aborting
    /// the batch; they contribute no id.
    pub async fn next_id(&self) -> Result<u32, StoreError> {
        let mut max_id = 0;

        for slug in self.slugs().await? {
            match self.load(&slug).await {
                Ok(story) => max_id = max_id.max(story.id),
                Err(e) => warn!(slug = %slug, error = %e, "Skipping unreadable story file"),
            }
        }

        Ok(max_id + 1)
    }
}
