//! Application state shared across handlers.

use std::sync::Arc;

use menu_cart_core::{PricingEngine, Storefront};
use tokio::sync::Mutex;

use crate::catalogue::{self, LoadError};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The shopping session sits
/// behind a single mutex, so cart mutations are applied one handler at a
/// time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    http: reqwest::Client,
    storefront: Mutex<Storefront>,
}

impl AppState {
    /// Create a new application state with an unloaded catalogue.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storefront = Storefront::new(PricingEngine::new(config.sales_tax));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                http: reqwest::Client::new(),
                storefront: Mutex::new(storefront),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the shopping session.
    #[must_use]
    pub fn storefront(&self) -> &Mutex<Storefront> {
        &self.inner.storefront
    }

    /// Fetch the catalogue and install it into the session.
    ///
    /// Returns the number of items loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the resource cannot be read or parsed, or if a
    /// catalogue was already installed.
    pub async fn load_catalogue(&self) -> Result<usize, LoadError> {
        let catalogue = catalogue::load(&self.config().catalogue_source, &self.inner.http).await?;
        let count = catalogue.len();
        self.storefront().lock().await.populate_catalogue(catalogue)?;
        Ok(count)
    }

    /// Load the catalogue in the background.
    ///
    /// The menu stays empty until the load completes. A failure is logged
    /// and reported to Sentry; the menu then stays empty for the rest of the
    /// process.
    pub fn start_catalogue_load(&self) {
        let state = self.clone();
        tokio::spawn(async move {
            match state.load_catalogue().await {
                Ok(count) => {
                    tracing::info!(
                        items = count,
                        source = %state.config().catalogue_source,
                        "Catalogue loaded"
                    );
                }
                Err(e) => {
                    let event_id = sentry::capture_error(&e);
                    tracing::error!(
                        error = %e,
                        source = %state.config().catalogue_source,
                        sentry_event_id = %event_id,
                        "Unable to fetch catalogue"
                    );
                }
            }
        });
    }
}
