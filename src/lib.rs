pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::browse::BrowseUseCase;
use crate::application::discover::DiscoverUseCase;
use crate::config::DiscoveryConfig;
use crate::domain::entities::article::{ArticleSummary, Suggestion};
use crate::domain::entities::discovery_item::DiscoveryItem;
use crate::domain::entities::interest_vector::InterestVector;
use crate::domain::error::DomainError;
use crate::domain::ports::article_catalog::ArticleCatalog;
use crate::domain::ports::encyclopedia::EncyclopediaSource;
use crate::domain::ports::fandom_source::FandomSource;
use crate::domain::ports::shuffler::Shuffler;
use crate::domain::ports::source_locator::SourceLocator;
use crate::domain::values::correlation_mode::CorrelationMode;
use crate::domain::values::depth::Depth;
use crate::infrastructure::http::build_client;
use crate::infrastructure::locators::chain::ChainLocator;
use crate::infrastructure::locators::heuristic::HeuristicProber;
use crate::infrastructure::locators::static_table::StaticTableLocator;
use crate::infrastructure::mediawiki::fandom::FandomAdapter;
use crate::infrastructure::mediawiki::wikipedia::WikipediaAdapter;
use crate::infrastructure::shuffle::RandomShuffler;
use std::sync::Arc;

pub struct WikiDive {
    discover_uc: DiscoverUseCase,
    browse_uc: BrowseUseCase,
}

impl WikiDive {
    /// Live Wikipedia/Fandom adapters configured from `WIKIDIVE_*` env vars.
    pub fn new() -> Result<Self, DomainError> {
        Self::from_config(&DiscoveryConfig::from_env()?, Arc::new(RandomShuffler))
    }

    pub fn from_config(config: &DiscoveryConfig, shuffler: Arc<dyn Shuffler>) -> Result<Self, DomainError> {
        config.validate()?;
        let client = build_client(config);

        let wikipedia = Arc::new(WikipediaAdapter::new(
            client.clone(),
            &config.wikipedia_api,
            &config.wikipedia_rest,
        ));
        let fandom: Arc<dyn FandomSource> = Arc::new(FandomAdapter::new(client.clone()));
        let locators: Vec<Arc<dyn SourceLocator>> = vec![
            Arc::new(HeuristicProber::new(client, config.fandom_template.clone())),
            Arc::new(StaticTableLocator::default()),
        ];
        let locator: Arc<dyn SourceLocator> = Arc::new(ChainLocator::new(locators));

        Ok(Self::with_providers(
            wikipedia.clone(),
            wikipedia,
            fandom,
            locator,
            shuffler,
        ))
    }

    pub fn with_providers(
        encyclopedia: Arc<dyn EncyclopediaSource>,
        catalog: Arc<dyn ArticleCatalog>,
        fandom: Arc<dyn FandomSource>,
        locator: Arc<dyn SourceLocator>,
        shuffler: Arc<dyn Shuffler>,
    ) -> Self {
        Self {
            discover_uc: DiscoverUseCase::new(encyclopedia, fandom, locator.clone(), shuffler),
            browse_uc: BrowseUseCase::new(catalog, locator),
        }
    }

    // Delegating methods
    pub async fn discover(
        &self,
        vectors: &[InterestVector],
        depth: Depth,
        mode: CorrelationMode,
    ) -> Result<Vec<DiscoveryItem>, DomainError> {
        self.discover_uc.execute(vectors, depth, mode).await
    }

    pub async fn summary(&self, title: &str) -> Result<Option<ArticleSummary>, DomainError> {
        self.browse_uc.summary(title).await
    }

    pub async fn random_article(&self) -> Option<ArticleSummary> {
        self.browse_uc.random().await
    }

    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.browse_uc.suggest(query).await
    }

    pub async fn locate_wiki(&self, topic: &str) -> Result<Option<String>, DomainError> {
        self.browse_uc.locate(topic).await
    }
}
