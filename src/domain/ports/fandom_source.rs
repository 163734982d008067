use crate::domain::entities::canonical_page::CanonicalPage;
use async_trait::async_trait;

/// Per-wiki similarity search across Fandom wikis.
#[async_trait]
pub trait FandomSource: Send + Sync {
    /// Up to `limit` pages similar to `topic` on the wiki rooted at `base_url`.
    ///
    /// The topic is first resolved to the wiki's own title for it; if that
    /// search fails the raw topic is used. Failures yield an empty list.
    async fn more_like(&self, base_url: &str, topic: &str, limit: usize) -> Vec<CanonicalPage>;
}
