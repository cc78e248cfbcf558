//! The shop document store.
//!
//! [`ShopDataStore`] owns the current document and its persistence adapter.
//! Construct it once and share it by `Arc`. Readers get whole-document
//! snapshots and writers replace the whole document; there is no field-level
//! update path at this layer.
//!
//! Persistence is best effort. A stored copy that cannot be read or fails the
//! shape check is treated as absent, and a failed write leaves the in-memory
//! document authoritative for the rest of the process.

use std::sync::{PoisonError, RwLock};

use crate::default_data::default_shop_data;
use crate::schema::parse_document;
use crate::storage::{KeyValueStorage, StorageError};
use crate::types::ShopData;

/// Storage key of the persisted shop document.
pub const SHOP_DATA_KEY: &str = "swiftMenuPro.shopData";

/// Where the current document came from when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The bundled default.
    Default,
    /// A copy restored from persistent storage.
    Persisted,
}

/// Process-wide holder of the shop document.
pub struct ShopDataStore {
    storage: Box<dyn KeyValueStorage>,
    current: RwLock<ShopData>,
    source: DataSource,
}

impl std::fmt::Debug for ShopDataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopDataStore")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ShopDataStore {
    /// Open the store, restoring the persisted document if there is a usable one.
    pub fn open(storage: impl KeyValueStorage + 'static) -> Self {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);
        let (current, source) = match read_persisted(storage.as_ref()) {
            Ok(Some(data)) => (data, DataSource::Persisted),
            Ok(None) => (default_shop_data(), DataSource::Default),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable shop data, using bundled default");
                (default_shop_data(), DataSource::Default)
            }
        };

        tracing::debug!(?source, items = current.menu_items.len(), "Shop data store opened");

        Self {
            storage,
            current: RwLock::new(current),
            source,
        }
    }

    /// Where the document came from when the store was opened.
    #[must_use]
    pub const fn source(&self) -> DataSource {
        self.source
    }

    /// A snapshot of the current document.
    #[must_use]
    pub fn get(&self) -> ShopData {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole document and persist it.
    ///
    /// Every later [`get`](Self::get) observes `next`, even if persisting fails.
    pub fn replace(&self, next: ShopData) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.persist(&next);
        *current = next;
    }

    /// Replace the document with the bundled default and persist it.
    pub fn reset_to_default(&self) {
        self.replace(default_shop_data());
    }

    /// Drop the persisted copy and fall back to the bundled default in memory.
    ///
    /// The default is not written back, so the next process start also begins
    /// from the bundled default.
    pub fn clear_persisted(&self) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.storage.remove_item(SHOP_DATA_KEY) {
            tracing::warn!(error = %e, "Failed to remove persisted shop data");
        }
        *current = default_shop_data();
    }

    /// Re-read persistent storage, picking up commits made by another process.
    ///
    /// No stored value means the bundled default. If storage cannot be read the
    /// current document is kept. Returns `true` if the document changed.
    pub fn refresh(&self) -> bool {
        let next = match read_persisted(self.storage.as_ref()) {
            Ok(Some(data)) => data,
            Ok(None) => default_shop_data(),
            Err(e) => {
                tracing::warn!(error = %e, "Shop data refresh failed, keeping current document");
                return false;
            }
        };

        if *self.current.read().unwrap_or_else(PoisonError::into_inner) == next {
            return false;
        }
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
        tracing::info!("Shop data reloaded from storage");
        true
    }

    fn persist(&self, data: &ShopData) {
        let json = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode shop data, not persisted");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(SHOP_DATA_KEY, &json) {
            tracing::warn!(error = %e, "Failed to persist shop data, keeping in-memory copy");
        }
    }
}

/// Errors from reading the persisted copy.
#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Shape(#[from] crate::schema::ShapeError),
}

fn read_persisted(storage: &dyn KeyValueStorage) -> Result<Option<ShopData>, ReadError> {
    let Some(raw) = storage.get_item(SHOP_DATA_KEY)? else {
        return Ok(None);
    };
    Ok(Some(parse_document(&raw)?))
}
