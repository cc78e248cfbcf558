//! Menu image resolution.
//!
//! A menu item names its picture by slug. The resolver maps the slug to
//! `/assets/{slug}.jpg` when that file exists under the assets directory.
//! Lookups are cached in `moka` (5-minute TTL), including misses.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use swift_menu_core::ImageSlug;
use tracing::instrument;

/// URL prefix the assets directory is served under.
pub const ASSETS_PREFIX: &str = "/assets";

const IMAGE_EXTENSION: &str = "jpg";

/// Resolves image slugs to asset URLs.
#[derive(Clone)]
pub struct ImageResolver {
    inner: Arc<ImageResolverInner>,
}

struct ImageResolverInner {
    assets_dir: PathBuf,
    cache: Cache<String, Option<String>>,
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("assets_dir", &self.inner.assets_dir)
            .finish_non_exhaustive()
    }
}

impl ImageResolver {
    /// Create a resolver over `assets_dir`.
    #[must_use]
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(ImageResolverInner {
                assets_dir: assets_dir.into(),
                cache,
            }),
        }
    }

    /// The URL of the image for `slug`, or `None` if there is no such asset.
    ///
    /// Never fails: a missing or unsafe slug is logged and yields `None`.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn resolve(&self, slug: &ImageSlug) -> Option<String> {
        let key = slug.as_str().to_owned();
        if let Some(cached) = self.inner.cache.get(&key).await {
            return cached;
        }

        let resolved = self.lookup(slug).await;
        self.inner.cache.insert(key, resolved.clone()).await;
        resolved
    }

    async fn lookup(&self, slug: &ImageSlug) -> Option<String> {
        if !slug.is_file_safe() {
            tracing::warn!("Image slug is not a valid file name");
            return None;
        }

        let file_name = format!("{slug}.{IMAGE_EXTENSION}");
        let path = self.inner.assets_dir.join(&file_name);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(format!("{ASSETS_PREFIX}/{file_name}")),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Image path is not a file");
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Image not found");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("momos.jpg"), b"jpeg").unwrap();

        let resolver = ImageResolver::new(dir.path());
        assert_eq!(
            resolver.resolve(&ImageSlug::new("momos")).await.as_deref(),
            Some("/assets/momos.jpg")
        );
    }

    #[tokio::test]
    async fn test_missing_image_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ImageResolver::new(dir.path());
        assert!(resolver.resolve(&ImageSlug::new("chowmein")).await.is_none());
    }

    #[tokio::test]
    async fn test_unsafe_slug_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("secret.jpg"), b"jpeg").unwrap();
        let nested = dir.path().join("assets");
        std::fs::create_dir(&nested).unwrap();

        let resolver = ImageResolver::new(&nested);
        assert!(resolver.resolve(&ImageSlug::new("../secret")).await.is_none());
        assert!(resolver.resolve(&ImageSlug::new("")).await.is_none());
    }

    #[tokio::test]
    async fn test_result_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chai.jpg");
        std::fs::write(&path, b"jpeg").unwrap();

        let resolver = ImageResolver::new(dir.path());
        let slug = ImageSlug::new("chai");
        assert!(resolver.resolve(&slug).await.is_some());

        std::fs::remove_file(&path).unwrap();
        assert!(resolver.resolve(&slug).await.is_some());
    }
}
