//! Bounded concurrency integration tests
//!
//! The worker pool must never have more provider calls in flight than its
//! size, and every pending story must be claimed exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use lesestoff::core::{plan, run};
use lesestoff::domain::{Category, CefrLevel, TopicSpec};
use lesestoff::library::StoryStore;
use lesestoff::StoryProvider;

const SPECS: &[TopicSpec] = &[
    TopicSpec { level: CefrLevel::A1, category: Category::Blog, topic: "Topic one" },
    TopicSpec { level: CefrLevel::A1, category: Category::Blog, topic: "Topic two" },
    TopicSpec { level: CefrLevel::A1, category: Category::Blog, topic: "Topic three" },
    TopicSpec { level: CefrLevel::A2, category: Category::News, topic: "Topic four" },
    TopicSpec { level: CefrLevel::A2, category: Category::News, topic: "Topic five" },
    TopicSpec { level: CefrLevel::B1, category: Category::Story, topic: "Topic six" },
    TopicSpec { level: CefrLevel::B1, category: Category::Story, topic: "Topic seven" },
    TopicSpec { level: CefrLevel::B2, category: Category::Poem, topic: "Topic eight" },
    TopicSpec { level: CefrLevel::C1, category: Category::Science, topic: "Topic nine" },
    TopicSpec { level: CefrLevel::C2, category: Category::Culture, topic: "Topic ten" },
];

const CANNED_RESPONSE: &str = r#"{
    "title": "A Test Story",
    "sentences": [ { "de": "Satz.", "en": "Sentence." } ],
    "vocabulary": [
        { "word": "Satz", "article": "der", "type": "noun", "level": "A1", "meaning": "sentence" }
    ]
}"#;

/// Tracks how many calls are in flight at once.
struct InFlightProvider {
    current: AtomicUsize,
    max_seen: AtomicUsize,
    calls: AtomicUsize,
}

impl InFlightProvider {
    fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
            max_seen: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StoryProvider for InFlightProvider {
    fn name(&self) -> &str {
        "in-flight"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_seen.fetch_max(now, Ordering::SeqCst);

        // Hold the slot long enough for siblings to pile up.
        tokio::time::sleep(Duration::from_millis(25)).await;

        self.current.fetch_sub(1, Ordering::SeqCst);
        Ok(CANNED_RESPONSE.to_string())
    }
}

#[tokio::test]
async fn test_in_flight_calls_never_exceed_pool_size() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(StoryStore::open(temp.path().join("stories")).await.unwrap());
    let provider = Arc::new(InFlightProvider::new());

    let batch = plan(SPECS, &store).await.unwrap();
    assert_eq!(batch.pending.len(), SPECS.len());

    let report = run(provider.clone(), store.clone(), batch.pending, 3)
        .await
        .unwrap();

    assert_eq!(report.done, SPECS.len());
    assert_eq!(provider.calls.load(Ordering::SeqCst), SPECS.len());
    assert!(
        provider.max_seen.load(Ordering::SeqCst) <= 3,
        "saw {} concurrent calls with a pool of 3",
        provider.max_seen.load(Ordering::SeqCst)
    );
}

#[tokio::test]
async fn test_each_story_claimed_exactly_once() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(StoryStore::open(temp.path().join("stories")).await.unwrap());
    let provider = Arc::new(InFlightProvider::new());

    let batch = plan(SPECS, &store).await.unwrap();
    run(provider.clone(), store.clone(), batch.pending, 4)
        .await
        .unwrap();

    // One provider call and one file per spec, regardless of scheduling.
    assert_eq!(provider.calls.load(Ordering::SeqCst), SPECS.len());
    assert_eq!(store.count().await.unwrap(), SPECS.len());
}

#[tokio::test]
async fn test_pool_larger_than_work_still_completes() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(StoryStore::open(temp.path().join("stories")).await.unwrap());
    let provider = Arc::new(InFlightProvider::new());

    let batch = plan(&SPECS[..2], &store).await.unwrap();
    let report = run(provider.clone(), store.clone(), batch.pending, 16)
        .await
        .unwrap();

    assert_eq!(report.done, 2);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}
