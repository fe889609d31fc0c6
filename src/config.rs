//! Configuration for paths and generation settings.
//!
//! Sources (highest priority first):
//! 1. Environment variables (LESESTOFF_STORIES_DIR, LESESTOFF_META_PATH)
//! 2. Config file (lesestoff.yaml, found in the current directory or a parent)
//! 3. Defaults (data/stories, data/stories-meta.json)
//!
//! Relative paths in the config file are resolved against the file's
//! directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::DEFAULT_CONCURRENCY;

const CONFIG_FILE_NAME: &str = "lesestoff.yaml";
const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Raw config file schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub stories_dir: Option<String>,
    #[serde(default)]
    pub meta_path: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub concurrency: Option<usize>,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of slug-keyed story files.
    pub stories_dir: PathBuf,

    /// Path of the summary index file.
    pub meta_path: PathBuf,

    /// Provider model identifier.
    pub model: String,

    /// Worker pool size.
    pub concurrency: usize,

    /// Per-request timeout for provider calls.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self> {
        let file = find_config_file();

        let (raw, base_dir) = match &file {
            Some(path) => {
                let raw = load_config_file(path)?;
                let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
                (raw, base)
            }
            None => (ConfigFile::default(), PathBuf::from(".")),
        };

        let stories_dir = if let Ok(dir) = std::env::var("LESESTOFF_STORIES_DIR") {
            PathBuf::from(dir)
        } else if let Some(ref dir) = raw.stories_dir {
            resolve_path(&base_dir, dir)
        } else {
            base_dir.join("data").join("stories")
        };

        let meta_path = if let Ok(path) = std::env::var("LESESTOFF_META_PATH") {
            PathBuf::from(path)
        } else if let Some(ref path) = raw.meta_path {
            resolve_path(&base_dir, path)
        } else {
            base_dir.join("data").join("stories-meta.json")
        };

        Ok(Self {
            stories_dir,
            meta_path,
            model: raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            concurrency: raw.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            request_timeout: Duration::from_secs(
                raw.request_timeout_seconds
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }
}

/// Find the config file by searching the current directory and parents.
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
stories_dir: ./content/stories
model: some-model
concurrency: 3
request_timeout_seconds: 30
"#
        )
        .unwrap();

        let raw = load_config_file(&path).unwrap();
        assert_eq!(raw.stories_dir, Some("./content/stories".to_string()));
        assert_eq!(raw.model, Some("some-model".to_string()));
        assert_eq!(raw.concurrency, Some(3));
        assert_eq!(raw.request_timeout_seconds, Some(30));
        assert!(raw.meta_path.is_none());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/srv/lesestoff");

        assert_eq!(
            resolve_path(&base, "data/stories"),
            PathBuf::from("/srv/lesestoff/data/stories")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/stories"),
            PathBuf::from("/absolute/stories")
        );
    }
}
