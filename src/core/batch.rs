//! Batch planning and bounded-concurrency dispatch.
//!
//! Planning is sequential and side-effect free: slugs are assigned and
//! deduplicated in catalog order, already-persisted topics are dropped,
//! and ids are fixed before any worker starts. Dispatch runs a fixed pool
//! of workers over a shared atomic cursor, so each pending story is
//! claimed exactly once and at most `concurrency` provider calls are in
//! flight at any time.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::adapters::StoryProvider;
use crate::domain::{slugify, Category, CefrLevel, SlugSet, Story, TopicSpec};
use crate::library::store::{StoreError, StoryStore};

use super::prompt::{build_prompt, parse_response};

/// Default worker pool size.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// How many failures get a full log line before we only count.
const MAX_REPORTED_FAILURES: usize = 5;

/// One unit of planned work: a topic with its slug and id fixed.
#[derive(Debug, Clone)]
pub struct PendingStory {
    pub level: CefrLevel,
    pub category: Category,
    pub topic: &'static str,
    pub slug: String,
    pub id: u32,
}

/// Result of the planning pass.
#[derive(Debug)]
pub struct BatchPlan {
    /// Work still to do, in catalog order.
    pub pending: Vec<PendingStory>,

    /// Catalog entries whose slug already exists in the store.
    pub skipped: usize,

    /// Total catalog entries considered.
    pub total: usize,
}

/// Final tally of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub done: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Plan a batch: assign slugs (deduplicated within this pass), drop
/// topics that already exist, and fix ids above the store's current max.
pub async fn plan(specs: &[TopicSpec], store: &StoryStore) -> Result<BatchPlan, StoreError> {
    let mut slugs = SlugSet::new();
    let mut planned = Vec::new();
    let mut skipped = 0;

    for spec in specs {
        let slug = slugs.assign(&slugify(spec.topic));
        if store.exists(&slug) {
            skipped += 1;
        } else {
            planned.push((spec, slug));
        }
    }

    // Ids are fixed here, before dispatch, so concurrent workers never
    // race on id assignment.
    let mut next_id = store.next_id().await?;
    let pending = planned
        .into_iter()
        .map(|(spec, slug)| {
            let id = next_id;
            next_id += 1;
            PendingStory {
                level: spec.level,
                category: spec.category,
                topic: spec.topic,
                slug,
                id,
            }
        })
        .collect();

    Ok(BatchPlan {
        pending,
        skipped,
        total: specs.len(),
    })
}

/// Generate and persist a single planned story.
pub async fn generate_one(
    provider: &dyn StoryProvider,
    store: &StoryStore,
    item: &PendingStory,
) -> Result<()> {
    let prompt = build_prompt(item.level, item.category, item.topic);

    let raw = provider
        .complete(&prompt)
        .await
        .with_context(|| format!("Provider call failed for '{}'", item.slug))?;

    let content =
        parse_response(&raw).with_context(|| format!("Bad response for '{}'", item.slug))?;

    let story = Story {
        id: item.id,
        slug: item.slug.clone(),
        title: content.title,
        level: item.level,
        category: item.category,
        sentences: content.sentences,
        vocabulary: content.vocabulary,
    };

    store.save(&story).await?;
    debug!(slug = %item.slug, id = item.id, "Story persisted");

    Ok(())
}

/// Run all pending stories through a fixed pool of workers.
///
/// Failures are isolated to their story: they are counted, the first few
/// are logged with slug and message, and siblings keep running. Every
/// pending story is attempted exactly once.
pub async fn run(
    provider: Arc<dyn StoryProvider>,
    store: Arc<StoryStore>,
    pending: Vec<PendingStory>,
    concurrency: usize,
) -> Result<BatchReport> {
    let total = pending.len();
    if total == 0 {
        return Ok(BatchReport {
            done: 0,
            failed: 0,
            skipped: 0,
        });
    }

    let pending = Arc::new(pending);
    let cursor = Arc::new(AtomicUsize::new(0));
    let done = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));

    let workers = concurrency.max(1).min(total);
    info!(total, workers, "Dispatching batch");

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let provider = Arc::clone(&provider);
        let store = Arc::clone(&store);
        let pending = Arc::clone(&pending);
        let cursor = Arc::clone(&cursor);
        let done = Arc::clone(&done);
        let failed = Arc::clone(&failed);

        handles.push(tokio::spawn(async move {
            loop {
                // Atomic claim: no two workers ever see the same index.
                let idx = cursor.fetch_add(1, Ordering::SeqCst);
                if idx >= pending.len() {
                    break;
                }

                let item = &pending[idx];
                match generate_one(provider.as_ref(), store.as_ref(), item).await {
                    Ok(()) => {
                        done.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(e) => {
                        let nth = failed.fetch_add(1, Ordering::SeqCst) + 1;
                        if nth <= MAX_REPORTED_FAILURES {
                            warn!(slug = %item.slug, error = %e, "Story generation failed");
                        }
                    }
                }

                let d = done.load(Ordering::SeqCst);
                let f = failed.load(Ordering::SeqCst);
                print!("\r   {}/{} — {} generated, {} failed   ", d + f, pending.len(), d, f);
                let _ = std::io::stdout().flush();
            }
        }));
    }

    for handle in handles {
        handle.await.context("Batch worker panicked")?;
    }
    println!();

    Ok(BatchReport {
        done: done.load(Ordering::SeqCst),
        failed: failed.load(Ordering::SeqCst),
        skipped: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CATALOG;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_plan_empty_store_keeps_catalog_order() {
        let temp = TempDir::new().unwrap();
        let store = StoryStore::open(temp.path()).await.unwrap();

        let plan = plan(CATALOG, &store).await.unwrap();

        assert_eq!(plan.total, CATALOG.len());
        assert_eq!(plan.skipped, 0);
        assert_eq!(plan.pending.len(), CATALOG.len());

        // Ids strictly increasing in catalog order, starting at 1.
        for (i, item) in plan.pending.iter().enumerate() {
            assert_eq!(item.id, (i + 1) as u32);
        }
    }

    #[tokio::test]
    async fn test_plan_dedupes_colliding_topics() {
        const SPECS: &[TopicSpec] = &[
            TopicSpec {
                level: CefrLevel::A1,
                category: Category::Blog,
                topic: "My best friend",
            },
            TopicSpec {
                level: CefrLevel::A2,
                category: Category::Story,
                topic: "My best friend!",
            },
        ];

        let temp = TempDir::new().unwrap();
        let store = StoryStore::open(temp.path()).await.unwrap();

        let plan = plan(SPECS, &store).await.unwrap();
        assert_eq!(plan.pending[0].slug, "my-best-friend");
        assert_eq!(plan.pending[1].slug, "my-best-friend-2");
    }
}
