use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One user-supplied search input, optionally pinned to a single Fandom wiki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInterestVector")]
pub struct InterestVector {
    pub term: String,
    /// Fandom wiki root URL (no `/api.php`). When set, the vector expands
    /// only into that wiki.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_source: Option<String>,
}

impl InterestVector {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into().trim().to_string(),
            locked_source: None,
        }
    }

    pub fn locked(term: impl Into<String>, source: &str) -> Self {
        Self {
            term: term.into().trim().to_string(),
            locked_source: normalize_wiki_root(source),
        }
    }

    pub fn lock(&self) -> Option<&str> {
        self.locked_source.as_deref()
    }

    /// Trimmed term and normalized lock, whatever way the vector was built.
    pub fn normalized(&self) -> Self {
        match self.locked_source.as_deref() {
            Some(source) => Self::locked(self.term.as_str(), source),
            None => Self::new(self.term.as_str()),
        }
    }
}

/// Wire shape; every deserialized vector goes through [`InterestVector::normalized`].
#[derive(Deserialize)]
struct RawInterestVector {
    term: String,
    #[serde(default)]
    locked_source: Option<String>,
}

impl From<RawInterestVector> for InterestVector {
    fn from(raw: RawInterestVector) -> Self {
        InterestVector {
            term: raw.term,
            locked_source: raw.locked_source,
        }
        .normalized()
    }
}

/// Accepts `term` or `term@https://wiki.fandom.com`.
impl FromStr for InterestVector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vector = match s.rsplit_once('@') {
            Some((term, url)) if url.trim_start().starts_with("http") => {
                InterestVector::locked(term, url)
            }
            _ => InterestVector::new(s),
        };
        if vector.term.is_empty() {
            return Err(format!("Empty interest term in '{s}'"));
        }
        Ok(vector)
    }
}

/// Strips whitespace, trailing slashes and a trailing `/api.php`.
pub fn normalize_wiki_root(url: &str) -> Option<String> {
    let mut root = url.trim().trim_end_matches('/');
    if let Some(stripped) = root.strip_suffix("/api.php") {
        root = stripped.trim_end_matches('/');
    }
    if root.is_empty() {
        None
    } else {
        Some(root.to_string())
    }
}
