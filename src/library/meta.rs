//! Summary index over the story store.
//!
//! Derived data only: the index is always rebuilt from a full store scan
//! and written whole, so it can be discarded at any time. The write goes
//! through a temp file plus rename so readers never observe a partial
//! index.

use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::domain::StoryMeta;

use super::store::{StoreError, StoryStore};

/// Rebuild the index from every story in the store and write it to
/// `meta_path`. Returns the entry count.
pub async fn rebuild(store: &StoryStore, meta_path: &Path) -> Result<usize, StoreError> {
    let mut entries = Vec::new();

    for slug in store.slugs().await? {
        let story = store.load(&slug).await?;
        entries.push(StoryMeta::from(&story));
    }

    write_atomic(meta_path, &entries).await?;
    info!(count = entries.len(), path = %meta_path.display(), "Rebuilt summary index");

    Ok(entries.len())
}

/// Load a previously written index.
pub async fn load(meta_path: &Path) -> Result<Vec<StoryMeta>, StoreError> {
    let content = fs::read_to_string(meta_path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn write_atomic(path: &Path, entries: &[StoryMeta]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(entries)?;

    // Same-directory temp file so the rename stays on one filesystem.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).await?;
    fs::rename(&tmp, path).await?;

    Ok(())
}
