//! Story document types shared by the store, the pipeline, and the CLI.
//!
//! All enums are closed sets; provider responses that use values outside
//! them fail to decode and are treated as per-story failures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// CEFR proficiency level, ordered beginner to advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// All levels in difficulty order.
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A1" => Ok(CefrLevel::A1),
            "A2" => Ok(CefrLevel::A2),
            "B1" => Ok(CefrLevel::B1),
            "B2" => Ok(CefrLevel::B2),
            "C1" => Ok(CefrLevel::C1),
            "C2" => Ok(CefrLevel::C2),
            other => anyhow::bail!("Unknown CEFR level: {}", other),
        }
    }
}

/// Story genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Story,
    Poem,
    Blog,
    Journal,
    Science,
    Culture,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Story => "story",
            Category::Poem => "poem",
            Category::Blog => "blog",
            Category::Journal => "journal",
            Category::Science => "science",
            Category::Culture => "culture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "news" => Ok(Category::News),
            "story" => Ok(Category::Story),
            "poem" => Ok(Category::Poem),
            "blog" => Ok(Category::Blog),
            "journal" => Ok(Category::Journal),
            "science" => Ok(Category::Science),
            "culture" => Ok(Category::Culture),
            other => anyhow::bail!("Unknown category: {}", other),
        }
    }
}

/// Grammatical word class of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Preposition,
    Pronoun,
    Expression,
}

/// Definite article marking grammatical gender (nouns only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

/// One bilingual sentence pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// German sentence.
    pub de: String,

    /// English translation.
    pub en: String,
}

/// One vocabulary entry picked from a story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabWord {
    pub word: String,

    /// Present only for nouns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,

    #[serde(rename = "type")]
    pub word_class: WordClass,

    /// CEFR level of the word itself (may differ from the story level).
    pub level: CefrLevel,

    pub meaning: String,
}

/// A persisted story document, one per slug-keyed file in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Monotonic integer id, assigned at batch start.
    pub id: u32,

    /// Storage key and URL path segment.
    pub slug: String,

    pub title: String,

    pub level: CefrLevel,

    pub category: Category,

    pub sentences: Vec<Sentence>,

    pub vocabulary: Vec<VocabWord>,
}

/// Lightweight projection of a story for the summary index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMeta {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub level: CefrLevel,
    pub category: Category,
    pub sentence_count: usize,
    pub vocab_count: usize,
}

impl From<&Story> for StoryMeta {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id,
            slug: story.slug.clone(),
            title: story.title.clone(),
            level: story.level,
            category: story.category,
            sentence_count: story.sentences.len(),
            vocab_count: story.vocabulary.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_story() -> Story {
        Story {
            id: 3,
            slug: "ein-hund-im-park".to_string(),
            title: "A Dog in the Park".to_string(),
            level: CefrLevel::A1,
            category: Category::Story,
            sentences: vec![Sentence {
                de: "Der Hund läuft im Park.".to_string(),
                en: "The dog runs in the park.".to_string(),
            }],
            vocabulary: vec![VocabWord {
                word: "Hund".to_string(),
                article: Some(Article::Der),
                word_class: WordClass::Noun,
                level: CefrLevel::A1,
                meaning: "dog".to_string(),
            }],
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(CefrLevel::A1 < CefrLevel::B1);
        assert!(CefrLevel::C1 < CefrLevel::C2);
        assert_eq!(CefrLevel::ALL.len(), 6);
    }

    #[test]
    fn test_level_round_trip() {
        for level in CefrLevel::ALL {
            assert_eq!(level.as_str().parse::<CefrLevel>().unwrap(), level);
        }
        assert!("D1".parse::<CefrLevel>().is_err());
    }

    #[test]
    fn test_story_wire_format() {
        let json = serde_json::to_value(sample_story()).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["level"], "A1");
        assert_eq!(json["category"], "story");
        assert_eq!(json["vocabulary"][0]["article"], "der");
        assert_eq!(json["vocabulary"][0]["type"], "noun");
    }

    #[test]
    fn test_article_omitted_for_non_nouns() {
        let word = VocabWord {
            word: "laufen".to_string(),
            article: None,
            word_class: WordClass::Verb,
            level: CefrLevel::A1,
            meaning: "to run".to_string(),
        };

        let json = serde_json::to_value(&word).unwrap();
        assert!(json.get("article").is_none());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let bad = r#"{"word":"x","type":"particle","level":"A1","meaning":"y"}"#;
        assert!(serde_json::from_str::<VocabWord>(bad).is_err());
    }

    #[test]
    fn test_meta_projection_counts() {
        let story = sample_story();
        let meta = StoryMeta::from(&story);

        assert_eq!(meta.sentence_count, story.sentences.len());
        assert_eq!(meta.vocab_count, story.vocabulary.len());

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["sentenceCount"], 1);
        assert_eq!(json["vocabCount"], 1);
    }
}
