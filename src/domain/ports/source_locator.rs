use async_trait::async_trait;

/// Finds the Fandom wiki covering a free-text topic.
///
/// Returns the wiki root URL (without `/api.php`), or `None` when no wiki
/// could be found. Never fails.
#[async_trait]
pub trait SourceLocator: Send + Sync {
    fn name(&self) -> &str;

    async fn locate(&self, topic: &str) -> Option<String>;
}
