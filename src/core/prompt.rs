//! Prompt construction and response decoding.
//!
//! The prompt pins the exact JSON shape the provider must return; the
//! decoder is the matching gate that converts anything off-shape into a
//! per-story failure instead of a bad document.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{Category, CefrLevel, Sentence, VocabWord};

/// Grammatical complexity guidance per level, included in the prompt.
pub fn level_guidance(level: CefrLevel) -> &'static str {
    match level {
        CefrLevel::A1 => {
            "Very simple present tense only. Max 8-word sentences. \
             Basic everyday vocabulary. No subordinate clauses."
        }
        CefrLevel::A2 => {
            "Simple sentences, some compound sentences with \"und/aber/oder\". \
             Present and past tense. Common vocabulary."
        }
        CefrLevel::B1 => {
            "Moderate complexity. Mix of tenses. Some subordinate clauses. \
             B1-level vocabulary with idioms."
        }
        CefrLevel::B2 => {
            "Complex sentences, passive voice, subjunctive mood allowed. \
             Abstract vocabulary welcome."
        }
        CefrLevel::C1 => {
            "Sophisticated syntax. Rich vocabulary. Nuanced argumentation. \
             Academic or literary register."
        }
        CefrLevel::C2 => {
            "Literary or academic German. Complex rhetorical structures. \
             Full stylistic range."
        }
    }
}

/// Target sentence count range per level.
pub fn sentence_range(level: CefrLevel) -> &'static str {
    match level {
        CefrLevel::A1 => "6-7",
        CefrLevel::A2 => "7-8",
        CefrLevel::B1 | CefrLevel::B2 | CefrLevel::C1 | CefrLevel::C2 => "7-9",
    }
}

/// Build the generation prompt for one story.
pub fn build_prompt(level: CefrLevel, category: Category, topic: &str) -> String {
    format!(
        "Generate a German language learning story. Return ONLY valid JSON, no markdown.\n\
         \n\
         Level: {level} ({guidance})\n\
         Category: {category}\n\
         Topic: {topic}\n\
         Sentences: {count} total\n\
         \n\
         JSON schema (follow exactly):\n\
         {{\n\
         \x20 \"title\": \"English title (engaging, 5-10 words)\",\n\
         \x20 \"sentences\": [\n\
         \x20   {{ \"de\": \"German sentence.\", \"en\": \"English translation.\" }}\n\
         \x20 ],\n\
         \x20 \"vocabulary\": [\n\
         \x20   {{\n\
         \x20     \"word\": \"German word\",\n\
         \x20     \"article\": \"der|die|das (only for nouns, else omit this field)\",\n\
         \x20     \"type\": \"noun|verb|adjective|adverb|conjunction|preposition|pronoun|expression\",\n\
         \x20     \"level\": \"{level}\",\n\
         \x20     \"meaning\": \"English meaning\"\n\
         \x20   }}\n\
         \x20 ]\n\
         }}\n\
         \n\
         Rules:\n\
         - vocabulary: 5-7 words, pick the most useful/interesting ones from the story\n\
         - For nouns always include article field\n\
         - vocabulary \"level\" should reflect the actual CEFR level of that word (may differ from story level)\n\
         - sentences must be grammatically correct German\n\
         - translations must be natural English",
        level = level,
        guidance = level_guidance(level),
        category = category,
        topic = topic,
        count = sentence_range(level),
    )
}

/// Content decoded from a provider response, before id/slug assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    pub sentences: Vec<Sentence>,
    pub vocabulary: Vec<VocabWord>,
}

/// Decode a raw provider response into validated story content.
///
/// Strips markdown code fences before parsing; providers wrap the payload
/// in them despite being told not to.
pub fn parse_response(raw: &str) -> Result<GeneratedContent> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let content: GeneratedContent =
        serde_json::from_str(cleaned).context("Response is not the expected story shape")?;

    if content.title.trim().is_empty() {
        anyhow::bail!("Response has an empty title");
    }
    if content.sentences.is_empty() {
        anyhow::bail!("Response has no sentences");
    }
    if content.vocabulary.is_empty() {
        anyhow::bail!("Response has no vocabulary");
    }

    Ok(content)
}
