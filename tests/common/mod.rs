//! Shared test helpers: recording in-memory ports.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wikidive::application::discover::DiscoverUseCase;
use wikidive::domain::entities::canonical_page::CanonicalPage;
use wikidive::domain::entities::discovery_item::DiscoveryItem;
use wikidive::domain::ports::encyclopedia::EncyclopediaSource;
use wikidive::domain::ports::fandom_source::FandomSource;
use wikidive::domain::ports::shuffler::Shuffler;
use wikidive::domain::ports::source_locator::SourceLocator;
use wikidive::domain::values::origin::Origin;
use wikidive::domain::values::source_kind::SourceKind;

pub const FALLOUT_WIKI: &str = "https://fallout.fandom.com";

pub fn pages(titles: &[&str]) -> Vec<CanonicalPage> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| CanonicalPage::new(i as u64 + 100, *t))
        .collect()
}

pub fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{prefix} {i}")).collect()
}

#[derive(Default)]
pub struct MockWikipedia {
    resolutions: HashMap<String, String>,
    similar: HashMap<String, Vec<String>>,
    pub resolve_calls: Mutex<Vec<String>>,
    pub more_like_calls: Mutex<Vec<(String, usize)>>,
}

impl MockWikipedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolves(mut self, term: &str, title: &str) -> Self {
        self.resolutions.insert(term.to_string(), title.to_string());
        self
    }

    pub fn similar(mut self, title: &str, titles: &[&str]) -> Self {
        self.similar
            .insert(title.to_string(), titles.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn similar_owned(mut self, title: &str, titles: Vec<String>) -> Self {
        self.similar.insert(title.to_string(), titles);
        self
    }

    pub fn more_like_calls(&self) -> Vec<(String, usize)> {
        self.more_like_calls.lock().unwrap().clone()
    }

    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EncyclopediaSource for MockWikipedia {
    fn name(&self) -> &str {
        "mock_wikipedia"
    }

    async fn resolve(&self, term: &str) -> Option<CanonicalPage> {
        self.resolve_calls.lock().unwrap().push(term.to_string());
        self.resolutions
            .get(term)
            .map(|title| CanonicalPage::new(1, title.clone()))
    }

    async fn more_like(&self, title: &str, limit: usize) -> Vec<CanonicalPage> {
        self.more_like_calls
            .lock()
            .unwrap()
            .push((title.to_string(), limit));
        self.similar
            .get(title)
            .map(|titles| {
                titles
                    .iter()
                    .take(limit)
                    .enumerate()
                    .map(|(i, t)| CanonicalPage::new(i as u64 + 1000, t.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Pages keyed by `(wiki root, topic)`.
#[derive(Default)]
pub struct MockFandom {
    similar: HashMap<(String, String), Vec<String>>,
    pub calls: Mutex<Vec<(String, String, usize)>>,
}

impl MockFandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn similar(mut self, base_url: &str, topic: &str, titles: &[&str]) -> Self {
        self.similar.insert(
            (base_url.to_string(), topic.to_string()),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn similar_owned(mut self, base_url: &str, topic: &str, titles: Vec<String>) -> Self {
        self.similar
            .insert((base_url.to_string(), topic.to_string()), titles);
        self
    }

    pub fn calls(&self) -> Vec<(String, String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FandomSource for MockFandom {
    async fn more_like(&self, base_url: &str, topic: &str, limit: usize) -> Vec<CanonicalPage> {
        self.calls
            .lock()
            .unwrap()
            .push((base_url.to_string(), topic.to_string(), limit));
        self.similar
            .get(&(base_url.to_string(), topic.to_string()))
            .map(|titles| {
                titles
                    .iter()
                    .take(limit)
                    .enumerate()
                    .map(|(i, t)| CanonicalPage::new(i as u64 + 5000, t.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct MockLocator {
    wikis: HashMap<String, String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finds(mut self, topic: &str, url: &str) -> Self {
        self.wikis.insert(topic.to_string(), url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceLocator for MockLocator {
    fn name(&self) -> &str {
        "mock_locator"
    }

    async fn locate(&self, topic: &str) -> Option<String> {
        self.calls.lock().unwrap().push(topic.to_string());
        self.wikis.get(topic).cloned()
    }
}

/// Leaves discovery items in accumulation order.
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle(&self, _items: &mut [DiscoveryItem]) {}
}

pub struct Harness {
    pub wikipedia: Arc<MockWikipedia>,
    pub fandom: Arc<MockFandom>,
    pub locator: Arc<MockLocator>,
    pub engine: DiscoverUseCase,
}

pub fn harness(wikipedia: MockWikipedia, fandom: MockFandom, locator: MockLocator) -> Harness {
    let wikipedia = Arc::new(wikipedia);
    let fandom = Arc::new(fandom);
    let locator = Arc::new(locator);
    let engine = DiscoverUseCase::new(
        wikipedia.clone(),
        fandom.clone(),
        locator.clone(),
        Arc::new(KeepOrder),
    );
    Harness {
        wikipedia,
        fandom,
        locator,
        engine,
    }
}

pub fn titles(items: &[DiscoveryItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

pub fn count(items: &[DiscoveryItem], origin: Origin, source: SourceKind) -> usize {
    items
        .iter()
        .filter(|i| i.origin == origin && i.source == source)
        .count()
}

/// Invariants every response must satisfy.
pub fn assert_well_formed(items: &[DiscoveryItem]) {
    assert!(items.len() <= 12, "more than 12 items: {}", items.len());

    let mut seen = std::collections::HashSet::new();
    for item in items {
        assert!(seen.insert(item.title.as_str()), "duplicate title {}", item.title);
    }

    let first_discovery = items
        .iter()
        .position(|i| i.origin == Origin::AiDiscovery)
        .unwrap_or(items.len());
    assert!(
        items[first_discovery..]
            .iter()
            .all(|i| i.origin == Origin::AiDiscovery),
        "anchor found after a discovery item"
    );
}
