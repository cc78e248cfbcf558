//! Shop data refresh middleware.
//!
//! The admin CLI runs in its own process with its own store. Re-reading the
//! persisted document before each page means a saved edit is served on the
//! next request, without restarting the storefront.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use swift_menu_core::ShopDataStore;

use crate::state::AppState;

/// Middleware that reloads the shop document before the handler runs.
///
/// A failed reload keeps the current document; the page is still served.
pub async fn refresh_shop_data(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    reload_store(Arc::clone(state.store())).await;
    next.run(request).await
}

/// Re-read persistent storage on the blocking pool.
///
/// Returns `true` if the document changed.
pub async fn reload_store(store: Arc<ShopDataStore>) -> bool {
    match tokio::task::spawn_blocking(move || store.refresh()).await {
        Ok(changed) => changed,
        Err(e) => {
            tracing::warn!(error = %e, "Shop data refresh task failed");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use swift_menu_core::FileStorage;

    use super::*;

    #[tokio::test]
    async fn test_reload_store_picks_up_commit_from_other_store() {
        let dir = tempfile::tempdir().unwrap();
        let served = Arc::new(ShopDataStore::open(FileStorage::new(dir.path())));
        let writer = ShopDataStore::open(FileStorage::new(dir.path()));

        assert!(!reload_store(Arc::clone(&served)).await);

        let mut data = writer.get();
        data.shop_info.phone = "+9779812345678".to_string();
        writer.replace(data);

        assert!(reload_store(Arc::clone(&served)).await);
        assert_eq!(served.get().shop_info.phone, "+9779812345678");
        assert!(!reload_store(served).await);
    }
}
