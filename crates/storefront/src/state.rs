//! Application state shared across handlers.

use std::sync::Arc;

use crate::commercetools::{CommercetoolsClient, CommercetoolsError, NormalizeOptions, map_locale};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration, the commercetools client and normalization options.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    commercetools: CommercetoolsClient,
    normalize_options: NormalizeOptions,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the commercetools API URL is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, CommercetoolsError> {
        let commercetools = CommercetoolsClient::new(&config.commercetools)?;
        let normalize_options = NormalizeOptions {
            locale: config.commercetools.content_locale.clone(),
            currency: config.commercetools.currency.clone(),
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                commercetools,
                normalize_options,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the commercetools API client.
    #[must_use]
    pub fn commercetools(&self) -> &CommercetoolsClient {
        &self.inner.commercetools
    }

    /// Options threaded through every normalization call.
    #[must_use]
    pub fn normalize_options(&self) -> &NormalizeOptions {
        &self.inner.normalize_options
    }

    /// Locale key of full-text search fields (`en-US` becomes `en`).
    #[must_use]
    pub fn search_locale(&self) -> &str {
        map_locale(&self.inner.config.commercetools.locale)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("normalize_options", &self.inner.normalize_options)
            .finish_non_exhaustive()
    }
}
