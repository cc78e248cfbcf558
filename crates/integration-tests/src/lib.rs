//! Integration tests for Swift Menu.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p swift-menu-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_editor` - Editor sessions against a file-backed store
//! - `storefront_pages` - Storefront router driven in-process with `oneshot`
//!
//! Every test gets its own temporary data and session directories, so tests
//! can run in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use secrecy::SecretString;
use swift_menu_admin::{AdminConfig, AdminEditor};
use swift_menu_core::{FileStorage, ShopDataStore};
use swift_menu_storefront::config::StorefrontConfig;
use swift_menu_storefront::state::AppState;
use tempfile::TempDir;
use tower::ServiceExt;

/// Passcode used by every test context.
pub const TEST_PASSCODE: &str = "adminFood@2025";

/// Upper bound on response bodies read by [`TestContext::get`].
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Temporary directories plus a store shared by editor and storefront.
pub struct TestContext {
    dir: TempDir,
    pub store: Arc<ShopDataStore>,
}

impl TestContext {
    /// Create a context with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = Arc::new(ShopDataStore::open(FileStorage::new(dir.path().join("data"))));
        Self { dir, store }
    }

    /// Directory of the persisted document.
    #[must_use]
    pub fn data_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("data")
    }

    /// Directory of the admin session flag.
    #[must_use]
    pub fn session_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("session")
    }

    /// Directory of menu images.
    #[must_use]
    pub fn assets_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("assets")
    }

    /// Root of the temporary tree, for scratch files.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Admin configuration pointing at this context's directories.
    #[must_use]
    pub fn admin_config(&self) -> AdminConfig {
        AdminConfig::new(TEST_PASSCODE, self.data_dir(), self.session_dir())
    }

    /// A locked editor over the shared store.
    #[must_use]
    pub fn editor(&self) -> AdminEditor {
        AdminEditor::from_config(Arc::clone(&self.store), &self.admin_config())
    }

    /// An editor unlocked with the correct passcode.
    ///
    /// # Panics
    ///
    /// Panics if the test passcode is rejected.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn unlocked_editor(&self) -> AdminEditor {
        let mut editor = self.editor();
        editor
            .unlock(&SecretString::from(TEST_PASSCODE))
            .expect("test passcode should unlock");
        editor
    }

    /// A second store over the same data directory, as the CLI opens it in
    /// its own process.
    #[must_use]
    pub fn open_separate_store(&self) -> Arc<ShopDataStore> {
        Arc::new(ShopDataStore::open(FileStorage::new(self.data_dir())))
    }

    /// An unlocked editor over its own store, not the shared one.
    ///
    /// # Panics
    ///
    /// Panics if the test passcode is rejected.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn separate_editor(&self) -> AdminEditor {
        let mut editor =
            AdminEditor::from_config(self.open_separate_store(), &self.admin_config());
        editor
            .unlock(&SecretString::from(TEST_PASSCODE))
            .expect("test passcode should unlock");
        editor
    }

    /// Storefront configuration pointing at this context's directories.
    #[must_use]
    pub fn storefront_config(&self) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: self.data_dir(),
            assets_dir: self.assets_dir(),
            ..StorefrontConfig::default()
        }
    }

    /// The storefront router over the shared store.
    #[must_use]
    pub fn storefront(&self) -> Router {
        self.storefront_with(self.storefront_config())
    }

    /// The storefront router over the shared store with a custom configuration.
    #[must_use]
    pub fn storefront_with(&self, config: StorefrontConfig) -> Router {
        swift_menu_storefront::app(AppState::new(config, Arc::clone(&self.store)))
    }

    /// Issue a GET against the storefront and return status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        get(self.storefront(), uri).await
    }
}

/// Issue a GET against `router` and return status and body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
#[allow(clippy::expect_used)]
pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    let response = router
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .expect("readable body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
