use super::{ActionApi, RawThumbnail, SourceError};
use crate::domain::entities::article::{ArticleSummary, Suggestion};
use crate::domain::entities::canonical_page::{CanonicalPage, Thumbnail};
use crate::domain::ports::article_catalog::ArticleCatalog;
use crate::domain::ports::encyclopedia::EncyclopediaSource;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

const SUGGESTION_LIMIT: usize = 5;

/// Wikipedia via the Action API (search, similarity, random, autocomplete)
/// and the REST API (page summaries).
pub struct WikipediaAdapter {
    api: ActionApi,
    client: Client,
    rest_base: String,
}

#[derive(Debug, Deserialize)]
struct RestSummary {
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<RawThumbnail>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: String,
}

impl WikipediaAdapter {
    pub fn new(client: Client, api_endpoint: &str, rest_base: &str) -> Self {
        Self {
            api: ActionApi::new(client.clone(), api_endpoint),
            client,
            rest_base: rest_base.trim_end_matches('/').to_string(),
        }
    }

    fn summary_url(&self, title: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.rest_base)
            .map_err(|e| SourceError::Parse(format!("bad REST base {}: {e}", self.rest_base)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Parse(format!("REST base {} cannot take a path", self.rest_base)))?
            .pop_if_empty()
            .push("page")
            .push("summary")
            .push(&title.replace(' ', "_"));
        Ok(url)
    }

    async fn fetch_summary(&self, title: &str) -> Result<Option<ArticleSummary>, SourceError> {
        let url = self.summary_url(title)?;
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(SourceError::Status {
                endpoint: self.rest_base.clone(),
                status: resp.status(),
            });
        }

        let data: RestSummary = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(Some(ArticleSummary {
            title: data.title,
            extract: data.extract,
            description: data.description,
            thumbnail: data.thumbnail.map(Thumbnail::from),
            canonical_url: data.content_urls.and_then(|c| c.desktop).map(|d| d.page),
        }))
    }
}

#[async_trait]
impl EncyclopediaSource for WikipediaAdapter {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn resolve(&self, term: &str) -> Option<CanonicalPage> {
        match self.api.search_top(term).await {
            Ok(found) => {
                debug!(term, resolved = ?found.as_ref().map(|p| &p.title), "wikipedia resolve");
                found
            }
            Err(e) => {
                warn!(term, error = %e, "wikipedia resolve failed");
                None
            }
        }
    }

    async fn more_like(&self, title: &str, limit: usize) -> Vec<CanonicalPage> {
        match self.api.more_like(title, limit).await {
            Ok(pages) => {
                debug!(title, limit, found = pages.len(), "wikipedia morelike");
                pages
            }
            Err(e) => {
                warn!(title, error = %e, "wikipedia morelike failed");
                vec![]
            }
        }
    }
}

#[async_trait]
impl ArticleCatalog for WikipediaAdapter {
    async fn summary(&self, title: &str) -> Option<ArticleSummary> {
        self.fetch_summary(title).await.unwrap_or_else(|e| {
            warn!(title, error = %e, "wikipedia summary failed");
            None
        })
    }

    async fn random(&self) -> Option<ArticleSummary> {
        let title = match self.api.random_title().await {
            Ok(Some(title)) => title,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "wikipedia random article failed");
                return None;
            }
        };
        self.summary(&title).await
    }

    async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        if query.trim().is_empty() {
            return vec![];
        }
        self.api
            .opensearch(query, SUGGESTION_LIMIT)
            .await
            .unwrap_or_else(|e| {
                warn!(query, error = %e, "wikipedia opensearch failed");
                vec![]
            })
    }
}
