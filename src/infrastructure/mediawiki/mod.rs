//! MediaWiki Action API plumbing shared by the Wikipedia and Fandom adapters.
//!
//! Both sources speak the same `action=query` dialect; only the endpoint
//! differs (`en.wikipedia.org/w/api.php` vs `<wiki-root>/api.php`).

pub mod fandom;
pub mod wikipedia;

use crate::domain::entities::article::Suggestion;
use crate::domain::entities::canonical_page::{CanonicalPage, Thumbnail};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Thumbnail width requested alongside similarity results.
const THUMB_SIZE: &str = "500";

#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP or network error
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    /// Response parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    query: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchList {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    pageid: u64,
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratedPages {
    #[serde(default)]
    pages: HashMap<String, RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    /// Absent on `missing` entries.
    #[serde(default)]
    pageid: Option<u64>,
    title: String,
    /// Generator relevance rank.
    #[serde(default)]
    index: Option<u32>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    thumbnail: Option<RawThumbnail>,
    #[serde(default)]
    fullurl: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawThumbnail {
    source: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

impl From<RawThumbnail> for Thumbnail {
    fn from(raw: RawThumbnail) -> Self {
        Thumbnail {
            url: raw.source,
            width: raw.width,
            height: raw.height,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RandomList {
    #[serde(default)]
    random: Vec<RandomHit>,
}

#[derive(Debug, Deserialize)]
struct RandomHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct SiteInfo {
    general: Option<serde_json::Value>,
}

/// One MediaWiki `api.php` endpoint.
#[derive(Clone)]
pub struct ActionApi {
    client: Client,
    endpoint: String,
}

impl ActionApi {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// API for a wiki root such as `https://fallout.fandom.com`.
    pub fn for_wiki_root(client: Client, root: &str) -> Self {
        Self::new(client, format!("{}/api.php", root.trim_end_matches('/')))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, SourceError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                endpoint: self.endpoint.clone(),
                status: resp.status(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }

    /// Top-1 full-text search hit.
    pub async fn search_top(&self, term: &str) -> Result<Option<CanonicalPage>, SourceError> {
        let data: QueryEnvelope<SearchList> = self
            .get_json(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .await?;

        Ok(data
            .query
            .unwrap_or_default()
            .search
            .into_iter()
            .next()
            .map(|hit| CanonicalPage::new(hit.pageid, hit.title)))
    }

    /// `morelike:` similarity search with extract, thumbnail and URL, in
    /// relevance order.
    pub async fn more_like(&self, title: &str, limit: usize) -> Result<Vec<CanonicalPage>, SourceError> {
        if limit == 0 {
            return Ok(vec![]);
        }

        let search = format!("morelike:{title}");
        let limit_str = limit.to_string();
        let data: QueryEnvelope<GeneratedPages> = self
            .get_json(&[
                ("action", "query"),
                ("generator", "search"),
                ("gsrsearch", search.as_str()),
                ("gsrlimit", limit_str.as_str()),
                ("prop", "pageimages|extracts|info"),
                ("pithumbsize", THUMB_SIZE),
                ("exintro", "true"),
                ("explaintext", "true"),
                ("inprop", "url"),
                ("format", "json"),
            ])
            .await?;

        let mut raw: Vec<RawPage> = data
            .query
            .unwrap_or_default()
            .pages
            .into_values()
            .filter(|p| p.pageid.is_some())
            .collect();
        raw.sort_by_key(|p| (p.index.unwrap_or(u32::MAX), p.pageid.unwrap_or_default()));

        Ok(raw
            .into_iter()
            .take(limit)
            .map(|p| CanonicalPage {
                page_id: p.pageid.unwrap_or_default(),
                title: p.title,
                extract: p.extract.filter(|e| !e.is_empty()),
                thumbnail: p.thumbnail.map(Thumbnail::from),
                canonical_url: p.fullurl,
            })
            .collect())
    }

    /// Existence check: does this endpoint answer a siteinfo query?
    pub async fn site_info(&self) -> Result<(), SourceError> {
        let data: QueryEnvelope<SiteInfo> = self
            .get_json(&[
                ("action", "query"),
                ("meta", "siteinfo"),
                ("format", "json"),
            ])
            .await?;

        match data.query.and_then(|q| q.general) {
            Some(_) => Ok(()),
            None => Err(SourceError::Parse(format!(
                "{} answered without siteinfo",
                self.endpoint
            ))),
        }
    }

    /// Title of one random main-namespace article.
    pub async fn random_title(&self) -> Result<Option<String>, SourceError> {
        let data: QueryEnvelope<RandomList> = self
            .get_json(&[
                ("action", "query"),
                ("list", "random"),
                ("rnnamespace", "0"),
                ("rnlimit", "1"),
                ("format", "json"),
            ])
            .await?;

        Ok(data
            .query
            .unwrap_or_default()
            .random
            .into_iter()
            .next()
            .map(|hit| hit.title))
    }

    /// Prefix autocomplete. The response is `[query, [titles], [descriptions], [urls]]`.
    pub async fn opensearch(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, SourceError> {
        let limit_str = limit.to_string();
        let data: serde_json::Value = self
            .get_json(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", limit_str.as_str()),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .await?;

        let titles = data
            .get(1)
            .and_then(|v| v.as_array())
            .ok_or_else(|| SourceError::Parse("opensearch response has no title list".into()))?;
        let urls = data.get(3).and_then(|v| v.as_array());

        Ok(titles
            .iter()
            .enumerate()
            .filter_map(|(i, title)| {
                let title = title.as_str()?.to_string();
                let url = urls
                    .and_then(|u| u.get(i))
                    .and_then(|u| u.as_str())
                    .unwrap_or_default()
                    .to_string();
                Some(Suggestion { title, url })
            })
            .collect())
    }
}
