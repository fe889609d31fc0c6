//! Slug derivation and within-run deduplication.
//!
//! Slugs double as store file names and URL path segments, so the output
//! alphabet is restricted to `[a-z0-9-]`.

use std::collections::HashSet;

/// Maximum slug length in characters.
const MAX_SLUG_LEN: usize = 60;

/// Derive a URL-safe slug from free topic text.
///
/// Lowercases, folds German umlauts and eszett to their ASCII digraphs,
/// drops everything else outside `[a-z0-9]`, turns whitespace runs into
/// single hyphens, and caps the result at 60 characters.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.to_lowercase().chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c if c.is_whitespace() || c == '-' => {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
            }
            _ => {}
        }
    }

    // Everything left is ASCII, so byte-truncation is safe.
    out.truncate(MAX_SLUG_LEN);
    out.trim_matches('-').to_string()
}

/// Tracks slugs assigned earlier in the same planning pass.
///
/// Collisions are resolved deterministically by appending `-2`, `-3`, …
/// in assignment order. Scoped to a single run; slugs from prior runs are
/// only consulted via the store existence check.
#[derive(Debug, Default)]
pub struct SlugSet {
    seen: HashSet<String>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique slug for the given base, suffixing on collision.
    pub fn assign(&mut self, base: &str) -> String {
        if self.seen.insert(base.to_string()) {
            return base.to_string();
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.seen.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
