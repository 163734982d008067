use super::ActionApi;
use crate::domain::entities::canonical_page::CanonicalPage;
use crate::domain::ports::fandom_source::FandomSource;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Similarity search on an arbitrary Fandom wiki, one `api.php` per wiki root.
pub struct FandomAdapter {
    client: Client,
}

impl FandomAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The wiki's own title for `topic`, or the raw topic when the search
    /// fails or finds nothing.
    async fn local_title(&self, api: &ActionApi, topic: &str) -> String {
        match api.search_top(topic).await {
            Ok(Some(page)) => page.title,
            Ok(None) => topic.to_string(),
            Err(e) => {
                warn!(wiki = api.endpoint(), topic, error = %e, "fandom search failed, using raw topic");
                topic.to_string()
            }
        }
    }
}

#[async_trait]
impl FandomSource for FandomAdapter {
    async fn more_like(&self, base_url: &str, topic: &str, limit: usize) -> Vec<CanonicalPage> {
        if limit == 0 {
            return vec![];
        }

        let api = ActionApi::for_wiki_root(self.client.clone(), base_url);
        let title = self.local_title(&api, topic).await;

        match api.more_like(&title, limit).await {
            Ok(pages) => {
                debug!(wiki = base_url, title = %title, limit, found = pages.len(), "fandom morelike");
                pages
            }
            Err(e) => {
                warn!(wiki = base_url, title = %title, error = %e, "fandom morelike failed");
                vec![]
            }
        }
    }
}
