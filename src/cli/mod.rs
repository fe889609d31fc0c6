//! Command-line interface for lesestoff.
//!
//! Provides commands for running the batch generator, rebuilding the
//! summary index, and inspecting the story library.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::AnthropicClient;
use crate::config::Config;
use crate::core::{self, BatchReport};
use crate::domain::{Category, CefrLevel, StoryMeta, CATALOG};
use crate::library::{meta, StoryStore};

/// lesestoff - batch generator for graded German reading stories
#[derive(Parser, Debug)]
#[command(name = "lesestoff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate all pending stories from the topic catalog
    Generate {
        /// Generate exactly one pending story and report pass/fail
        #[arg(long)]
        test: bool,

        /// Worker pool size (overrides config)
        #[arg(short, long, env = "LESESTOFF_CONCURRENCY")]
        concurrency: Option<usize>,
    },

    /// Rebuild the summary index from the story store
    RebuildIndex,

    /// List stories in the library
    List {
        /// Filter by CEFR level (A1..C2)
        #[arg(short, long)]
        level: Option<String>,

        /// Filter by category (news, story, poem, ...)
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Maximum number of stories to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show a story by slug
    Show {
        /// Story slug
        slug: String,

        /// Also print the vocabulary list
        #[arg(short, long)]
        full: bool,
    },
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate { test, concurrency } => generate(test, concurrency).await,
            Commands::RebuildIndex => rebuild_index().await,
            Commands::List {
                level,
                category,
                limit,
            } => list_stories(level, category, limit).await,
            Commands::Show { slug, full } => show_story(&slug, full).await,
        }
    }
}

/// Run the batch generator over the whole catalog.
async fn generate(test: bool, concurrency: Option<usize>) -> Result<()> {
    let config = Config::load()?;

    // Credential check comes first: a missing key must abort with zero
    // side effects, before the store directory is even created.
    let provider = AnthropicClient::from_env(config.model.clone(), config.request_timeout)?;

    let store = StoryStore::open(&config.stories_dir)
        .await
        .with_context(|| format!("Cannot open store: {}", config.stories_dir.display()))?;

    let plan = core::plan(CATALOG, &store).await?;

    println!("lesestoff story generator");
    println!("   {} topics total", plan.total);
    println!("   {} already generated (skipping)", plan.skipped);
    println!("   {} to generate", plan.pending.len());

    if plan.pending.is_empty() {
        println!("All stories already generated.");
        meta::rebuild(&store, &config.meta_path).await?;
        return Ok(());
    }

    if test {
        println!("Test mode: generating 1 story...");
        let item = &plan.pending[0];
        match core::batch::generate_one(&provider, &store, item).await {
            Ok(()) => println!("Test passed. Generated: {}", item.slug),
            Err(e) => eprintln!("Test failed: {:#}", e),
        }
        return Ok(());
    }

    let skipped = plan.skipped;
    let report = core::run(
        Arc::new(provider),
        Arc::new(store.clone()),
        plan.pending,
        concurrency.unwrap_or(config.concurrency),
    )
    .await?;

    println!("Done. Rebuilding summary index...");
    let total = meta::rebuild(&store, &config.meta_path).await?;

    print_report(&BatchReport { skipped, ..report });
    println!("   index updated: {} stories total", total);

    Ok(())
}

/// Rebuild the summary index without generating anything.
async fn rebuild_index() -> Result<()> {
    let config = Config::load()?;

    let store = StoryStore::open(&config.stories_dir)
        .await
        .with_context(|| format!("Cannot open store: {}", config.stories_dir.display()))?;

    let total = meta::rebuild(&store, &config.meta_path).await?;
    println!("Index rebuilt: {} stories", total);

    Ok(())
}

/// List stories, optionally filtered by level and category.
async fn list_stories(
    level: Option<String>,
    category: Option<String>,
    limit: usize,
) -> Result<()> {
    let config = Config::load()?;

    let level: Option<CefrLevel> = level.as_deref().map(str::parse).transpose()?;
    let category: Option<Category> = category.as_deref().map(str::parse).transpose()?;

    let store = StoryStore::open(&config.stories_dir).await?;

    let mut entries: Vec<StoryMeta> = Vec::new();
    for slug in store.slugs().await? {
        let story = store.load(&slug).await?;
        if level.is_some_and(|l| story.level != l) {
            continue;
        }
        if category.is_some_and(|c| story.category != c) {
            continue;
        }
        entries.push(StoryMeta::from(&story));
    }

    if entries.is_empty() {
        println!("No stories found");
        return Ok(());
    }

    entries.sort_by_key(|e| e.id);
    entries.truncate(limit);

    println!("{:<5} {:<6} {:<9} {:<45} {}", "ID", "LEVEL", "CATEGORY", "SLUG", "TITLE");
    println!("{}", "-".repeat(100));
    for e in entries {
        println!(
            "{:<5} {:<6} {:<9} {:<45} {}",
            e.id, e.level, e.category, e.slug, e.title
        );
    }

    Ok(())
}

/// Print a story's sentences (and vocabulary with --full).
async fn show_story(slug: &str, full: bool) -> Result<()> {
    let config = Config::load()?;
    let store = StoryStore::open(&config.stories_dir).await?;

    let story = store.load(slug).await?;

    println!("{} ({} / {})", story.title, story.level, story.category);
    println!();
    for sentence in &story.sentences {
        println!("  {}", sentence.de);
        println!("    {}", sentence.en);
    }

    if full {
        println!();
        println!("Vocabulary:");
        for word in &story.vocabulary {
            let article = word
                .article
                .map(|a| format!("{:?} ", a).to_lowercase())
                .unwrap_or_default();
            println!("  {}{} — {} [{}]", article, word.word, word.meaning, word.level);
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    println!(
        "   done={} skipped={} failed={}",
        report.done, report.skipped, report.failed
    );
}
