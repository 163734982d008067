use crate::domain::entities::canonical_page::CanonicalPage;
use crate::domain::values::origin::Origin;
use crate::domain::values::source_kind::SourceKind;
use serde::{Deserialize, Serialize};

/// One tile of the discovery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryItem {
    pub title: String,
    pub origin: Origin,
    pub source: SourceKind,
    /// Fandom wiki root the item came from; `None` for Wikipedia items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Absent when resolution failed; callers re-fetch if they need it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<CanonicalPage>,
}

impl DiscoveryItem {
    pub fn wikipedia_anchor(term: &str, canonical: Option<CanonicalPage>) -> Self {
        Self {
            title: canonical
                .as_ref()
                .map(|p| p.title.clone())
                .unwrap_or_else(|| term.to_string()),
            origin: Origin::UserSelected,
            source: SourceKind::Wikipedia,
            api_base_url: None,
            summary: canonical,
        }
    }

    pub fn fandom_anchor(term: &str, base_url: &str) -> Self {
        Self {
            title: term.to_string(),
            origin: Origin::UserSelected,
            source: SourceKind::Fandom,
            api_base_url: Some(base_url.to_string()),
            summary: None,
        }
    }

    pub fn discovered(page: CanonicalPage, source: SourceKind, api_base_url: Option<&str>) -> Self {
        Self {
            title: page.title.clone(),
            origin: Origin::AiDiscovery,
            source,
            api_base_url: api_base_url.map(String::from),
            summary: Some(page),
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.origin == Origin::UserSelected
    }
}
