//! Application state shared across handlers.

use std::sync::Arc;

use socialrules_core::RuleCatalog;

use crate::config::RelayConfig;
use crate::services::SocialRulesService;
use crate::slack::WebhookClient;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything inside is immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    social_rules: SocialRulesService,
}

impl AppState {
    /// Build state from a loaded configuration and a rule catalog.
    #[must_use]
    pub fn new(config: &RelayConfig, catalog: RuleCatalog) -> Self {
        let webhook = WebhookClient::new(config.webhook_url.clone());
        Self::from_parts(Arc::new(catalog), webhook)
    }

    /// Build state from an already-constructed catalog and webhook client.
    #[must_use]
    pub fn from_parts(catalog: Arc<RuleCatalog>, webhook: WebhookClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                social_rules: SocialRulesService::new(catalog, webhook),
            }),
        }
    }

    /// Returns the social rules service.
    #[must_use]
    pub fn social_rules(&self) -> &SocialRulesService {
        &self.inner.social_rules
    }
}
