use crate::domain::entities::article::{ArticleSummary, Suggestion};
use crate::domain::error::DomainError;
use crate::domain::ports::article_catalog::ArticleCatalog;
use crate::domain::ports::source_locator::SourceLocator;
use std::sync::Arc;

/// Lookups around the grid: card summaries, random pick, autocomplete and
/// previewing which Fandom wiki a term maps to.
pub struct BrowseUseCase {
    catalog: Arc<dyn ArticleCatalog>,
    locator: Arc<dyn SourceLocator>,
}

impl BrowseUseCase {
    pub fn new(catalog: Arc<dyn ArticleCatalog>, locator: Arc<dyn SourceLocator>) -> Self {
        Self { catalog, locator }
    }

    pub async fn summary(&self, title: &str) -> Result<Option<ArticleSummary>, DomainError> {
        let title = non_empty(title, "title")?;
        Ok(self.catalog.summary(title).await)
    }

    pub async fn random(&self) -> Option<ArticleSummary> {
        self.catalog.random().await
    }

    /// Empty input gives no suggestions rather than an error.
    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() {
            return vec![];
        }
        self.catalog.suggest(query).await
    }

    pub async fn locate(&self, topic: &str) -> Result<Option<String>, DomainError> {
        let topic = non_empty(topic, "topic")?;
        Ok(self.locator.locate(topic).await)
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("Empty {what}")));
    }
    Ok(trimmed)
}
