//! Hybrid interest discovery: expands a handful of interest vectors into a
//! capped grid of related Wikipedia and Fandom pages.
//!
//! Two correlation modes:
//! - `Parallel` expands each vector on its own, sequentially, into one
//!   shared [`Blend`].
//! - `Synthesis` runs one combined query across all vectors; when that
//!   finds nothing the request is re-run in `Parallel`.

use crate::application::blend::Blend;
use crate::domain::entities::discovery_item::DiscoveryItem;
use crate::domain::entities::interest_vector::InterestVector;
use crate::domain::error::DomainError;
use crate::domain::ports::encyclopedia::EncyclopediaSource;
use crate::domain::ports::fandom_source::FandomSource;
use crate::domain::ports::shuffler::Shuffler;
use crate::domain::ports::source_locator::SourceLocator;
use crate::domain::values::correlation_mode::CorrelationMode;
use crate::domain::values::depth::{Depth, SourceBudget};
use crate::domain::values::source_kind::SourceKind;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const MAX_VECTORS: usize = 5;

/// The combined synthesis query found nothing on either source.
#[derive(Debug, Error)]
#[error("no cross-vector correlation for \"{query}\"")]
pub struct CorrelationMiss {
    pub query: String,
}

/// Locator answers for the duration of one request.
#[derive(Debug, Default)]
struct WikiCache {
    located: HashMap<String, Option<String>>,
}

pub struct DiscoverUseCase {
    encyclopedia: Arc<dyn EncyclopediaSource>,
    fandom: Arc<dyn FandomSource>,
    locator: Arc<dyn SourceLocator>,
    shuffler: Arc<dyn Shuffler>,
}

impl DiscoverUseCase {
    pub fn new(
        encyclopedia: Arc<dyn EncyclopediaSource>,
        fandom: Arc<dyn FandomSource>,
        locator: Arc<dyn SourceLocator>,
        shuffler: Arc<dyn Shuffler>,
    ) -> Self {
        Self {
            encyclopedia,
            fandom,
            locator,
            shuffler,
        }
    }

    pub async fn execute(
        &self,
        vectors: &[InterestVector],
        depth: Depth,
        mode: CorrelationMode,
    ) -> Result<Vec<DiscoveryItem>, DomainError> {
        let normalized: Vec<InterestVector> =
            vectors.iter().map(InterestVector::normalized).collect();
        let vectors = normalized.as_slice();
        validate(vectors)?;

        let budget = depth.budget();
        let mut cache = WikiCache::default();
        info!(vectors = vectors.len(), depth = %depth, mode = %mode, "discovery request");

        let blend = match mode {
            CorrelationMode::Synthesis if vectors.len() > 1 => {
                match self.synthesize(vectors, budget, &mut cache).await {
                    Ok(blend) => blend,
                    Err(miss) => {
                        warn!(%miss, "synthesis found nothing, reverting to parallel");
                        self.expand_parallel(vectors, budget, &mut cache).await
                    }
                }
            }
            _ => self.expand_parallel(vectors, budget, &mut cache).await,
        };

        let items = blend.finish(self.shuffler.as_ref());
        info!(items = items.len(), "discovery complete");
        Ok(items)
    }

    /// One combined query on Wikipedia and on the first vector's wiki.
    async fn synthesize(
        &self,
        vectors: &[InterestVector],
        budget: SourceBudget,
        cache: &mut WikiCache,
    ) -> Result<Blend, CorrelationMiss> {
        let query = vectors
            .iter()
            .map(|v| v.term.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let Some(first) = vectors.first() else {
            return Err(CorrelationMiss { query });
        };
        info!(query = %query, "synthesis: cross-vector search");

        let wiki_probe = self.encyclopedia.more_like(&query, budget.wiki_limit);
        let fandom_probe = async {
            let target = match first.lock() {
                Some(lock) => Some(lock.to_string()),
                None => self.locate(&first.term, cache).await,
            };
            match target {
                Some(url) => {
                    let pages = self.fandom.more_like(&url, &query, budget.fandom_limit).await;
                    Some((url, pages))
                }
                None => None,
            }
        };
        let (wiki_pages, fandom_hit) = tokio::join!(wiki_probe, fandom_probe);

        let fandom_found = fandom_hit.as_ref().map_or(0, |(_, pages)| pages.len());
        if wiki_pages.is_empty() && fandom_found == 0 {
            return Err(CorrelationMiss { query });
        }
        debug!(wikipedia = wiki_pages.len(), fandom = fandom_found, "synthesis correlated");

        let mut blend = Blend::new();
        for vector in vectors {
            let anchor = self.anchor_for(vector).await;
            blend.push_anchor(anchor);
        }
        blend.push_discovered(wiki_pages, SourceKind::Wikipedia, None);
        if let Some((url, pages)) = fandom_hit {
            blend.push_discovered(pages, SourceKind::Fandom, Some(&url));
        }
        Ok(blend)
    }

    /// Vectors one at a time, in input order.
    async fn expand_parallel(
        &self,
        vectors: &[InterestVector],
        budget: SourceBudget,
        cache: &mut WikiCache,
    ) -> Blend {
        let mut blend = Blend::new();
        for vector in vectors {
            match vector.lock() {
                Some(lock) => self.expand_locked(&mut blend, vector, lock, budget).await,
                None => self.expand_open(&mut blend, vector, budget, cache).await,
            }
        }
        blend
    }

    /// A locked vector spends its whole budget on its own wiki.
    async fn expand_locked(
        &self,
        blend: &mut Blend,
        vector: &InterestVector,
        lock: &str,
        budget: SourceBudget,
    ) {
        blend.push_anchor(DiscoveryItem::fandom_anchor(&vector.term, lock));

        let pages = self.fandom.more_like(lock, &vector.term, budget.total()).await;
        let added = blend.push_discovered(pages, SourceKind::Fandom, Some(lock));
        debug!(term = %vector.term, wiki = lock, added, "locked vector expanded");
    }

    async fn expand_open(
        &self,
        blend: &mut Blend,
        vector: &InterestVector,
        budget: SourceBudget,
        cache: &mut WikiCache,
    ) {
        let anchor = self.anchor_for(vector).await;
        let title = anchor.title.clone();
        blend.push_anchor(anchor);

        let pages = self.encyclopedia.more_like(&title, budget.wiki_limit).await;
        let from_wiki = blend.push_discovered(pages, SourceKind::Wikipedia, None);

        let from_fandom = match self.locate(&vector.term, cache).await {
            Some(url) => {
                let pages = self
                    .fandom
                    .more_like(&url, &vector.term, budget.fandom_limit)
                    .await;
                blend.push_discovered(pages, SourceKind::Fandom, Some(&url))
            }
            None => {
                // No wiki: spend the fandom share on more Wikipedia.
                let pages = self.encyclopedia.more_like(&title, budget.fandom_limit).await;
                blend.push_discovered(pages, SourceKind::Wikipedia, None)
            }
        };
        debug!(term = %vector.term, title = %title, from_wiki, from_fandom, "vector expanded");
    }

    async fn anchor_for(&self, vector: &InterestVector) -> DiscoveryItem {
        match vector.lock() {
            Some(lock) => DiscoveryItem::fandom_anchor(&vector.term, lock),
            None => {
                let canonical = self.encyclopedia.resolve(&vector.term).await;
                DiscoveryItem::wikipedia_anchor(&vector.term, canonical)
            }
        }
    }

    async fn locate(&self, topic: &str, cache: &mut WikiCache) -> Option<String> {
        let key = topic.trim().to_lowercase();
        if let Some(hit) = cache.located.get(&key) {
            return hit.clone();
        }
        let found = self.locator.locate(topic).await;
        cache.located.insert(key, found.clone());
        found
    }
}

fn validate(vectors: &[InterestVector]) -> Result<(), DomainError> {
    if vectors.is_empty() {
        return Err("At least one interest vector is required".into());
    }
    if vectors.len() > MAX_VECTORS {
        return Err(DomainError::InvalidInput(format!(
            "At most {MAX_VECTORS} interest vectors are allowed, got {}",
            vectors.len()
        )));
    }
    if let Some(pos) = vectors.iter().position(|v| v.term.trim().is_empty()) {
        return Err(DomainError::InvalidInput(format!(
            "Interest vector {} has an empty term",
            pos + 1
        )));
    }
    Ok(())
}
