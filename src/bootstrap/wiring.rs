//! # Dependency Injection / 依赖注入模块
//!
//! Builds the process-scoped cache, the HTTP catalog adapter and one card per
//! configured creator. Assembly only: no rendering, no command handling.
//!
//! > **This is the only place allowed to depend on cc-infra and cc-app simultaneously.**
//! > **这是唯一允许同时依赖 cc-infra 和 cc-app 的地方。**

use std::sync::Arc;

use anyhow::Context;
use cc_app::{EntityFetchCache, LazyFlipCard};
use cc_core::config::AppConfig;
use cc_core::ports::CatalogPort;
use cc_core::CardLabels;
use cc_infra::{HttpCatalogClient, HttpCatalogConfig};
use tracing::info;

/// Everything the shell renders: the cards, their shared cache and the labels.
pub struct Deck {
    pub cache: Arc<EntityFetchCache>,
    pub cards: Vec<LazyFlipCard>,
    pub labels: CardLabels,
}

impl Deck {
    /// Assemble a deck over an arbitrary catalog port.
    pub fn with_catalog(catalog: Arc<dyn CatalogPort>, config: AppConfig) -> Self {
        let cache = Arc::new(EntityFetchCache::new(catalog));
        let cards = config
            .creators
            .into_iter()
            .map(|profile| LazyFlipCard::new(profile, cache.clone()))
            .collect();

        Self {
            cache,
            cards,
            labels: config.labels.with_fallbacks(),
        }
    }

    /// Look up a card by its 1-based position.
    pub fn card(&self, index: usize) -> anyhow::Result<&LazyFlipCard> {
        index
            .checked_sub(1)
            .and_then(|i| self.cards.get(i))
            .with_context(|| {
                format!(
                    "No card #{index}; the deck has {} card(s)",
                    self.cards.len()
                )
            })
    }
}

/// Wire the HTTP catalog adapter into a new deck.
pub fn build_deck(config: AppConfig) -> anyhow::Result<Deck> {
    let http_config = HttpCatalogConfig::from_catalog_config(&config.catalog);
    info!(
        base_url = %http_config.base_url,
        resource = %http_config.resource,
        timeout = ?http_config.timeout,
        creators = config.creators.len(),
        "building creator deck"
    );

    let client = HttpCatalogClient::new(http_config).context("Failed to create catalog client")?;
    Ok(Deck::with_catalog(Arc::new(client), config))
}
