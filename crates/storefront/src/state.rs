//! Application state shared across handlers.

use std::sync::Arc;

use swift_menu_core::{ShopData, ShopDataStore};

use crate::config::StorefrontConfig;
use crate::images::ImageResolver;
use crate::middleware::reload_store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Handlers only read the store;
/// the admin editor is the only writer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<ShopDataStore>,
    images: ImageResolver,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - Shop document store, possibly shared with an editor
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<ShopDataStore>) -> Self {
        let images = ImageResolver::new(&config.assets_dir);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                images,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shop document store.
    #[must_use]
    pub fn store(&self) -> &Arc<ShopDataStore> {
        &self.inner.store
    }

    /// Snapshot of the current shop document.
    #[must_use]
    pub fn shop(&self) -> ShopData {
        self.inner.store.get()
    }

    /// Get a reference to the image resolver.
    #[must_use]
    pub fn images(&self) -> &ImageResolver {
        &self.inner.images
    }

    /// Reload the persisted document on the configured interval.
    ///
    /// Picks up commits made by another process (the CLI editor). Does
    /// nothing when no interval is configured.
    pub fn start_refresh(&self) -> Option<tokio::task::JoinHandle<()>> {
        let period = self.config().refresh_interval?;
        let store = Arc::clone(self.store());

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; the store was just opened.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if reload_store(Arc::clone(&store)).await {
                    tracing::debug!("Storefront picked up new shop data");
                }
            }
        }))
    }
}
