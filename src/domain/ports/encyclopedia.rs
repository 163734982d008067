use crate::domain::entities::canonical_page::CanonicalPage;
use async_trait::async_trait;

/// General-purpose encyclopedia (Wikipedia) as seen by the discovery engine.
///
/// Implementations swallow their own failures: a network or parse error is
/// logged and reported as "no match" / an empty list, never as an error.
#[async_trait]
pub trait EncyclopediaSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Map a free-text term to its best-matching page (top-1 search hit).
    async fn resolve(&self, term: &str) -> Option<CanonicalPage>;

    /// Up to `limit` pages similar to `title`, in relevance order.
    async fn more_like(&self, title: &str, limit: usize) -> Vec<CanonicalPage>;
}
