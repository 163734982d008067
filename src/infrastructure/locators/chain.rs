use crate::domain::ports::source_locator::SourceLocator;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Asks each locator in turn; the first hit wins.
pub struct ChainLocator {
    locators: Vec<Arc<dyn SourceLocator>>,
}

impl ChainLocator {
    pub fn new(locators: Vec<Arc<dyn SourceLocator>>) -> Self {
        Self { locators }
    }
}

#[async_trait]
impl SourceLocator for ChainLocator {
    fn name(&self) -> &str {
        "chain"
    }

    async fn locate(&self, topic: &str) -> Option<String> {
        for locator in &self.locators {
            if let Some(url) = locator.locate(topic).await {
                debug!(topic, locator = locator.name(), wiki = %url, "fandom wiki located");
                return Some(url);
            }
        }
        debug!(topic, "no fandom wiki located");
        None
    }
}
