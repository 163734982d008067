use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The resolved identity of a term (or a similar page) on one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPage {
    pub page_id: u64,
    /// Canonical title as reported by the API; may differ from the input term.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

impl CanonicalPage {
    pub fn new(page_id: u64, title: impl Into<String>) -> Self {
        Self {
            page_id,
            title: title.into(),
            extract: None,
            thumbnail: None,
            canonical_url: None,
        }
    }

    pub fn is_disambiguation(&self) -> bool {
        self.title.contains("(disambiguation)")
    }
}
