use crate::domain::entities::article::{ArticleSummary, Suggestion};
use async_trait::async_trait;

/// Article lookups used by the grid outside of discovery: card summaries,
/// the random button and search-box autocomplete.
#[async_trait]
pub trait ArticleCatalog: Send + Sync {
    async fn summary(&self, title: &str) -> Option<ArticleSummary>;

    async fn random(&self) -> Option<ArticleSummary>;

    async fn suggest(&self, query: &str) -> Vec<Suggestion>;
}
