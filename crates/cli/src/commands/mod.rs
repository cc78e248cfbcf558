//! Command implementations.

pub mod admin;
pub mod menu;
pub mod shop;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use swift_menu_admin::{ConfigError, EditorError};
use swift_menu_core::{FileStorage, ShopDataStore};
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Admin configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The editor rejected the action.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Reading or writing a file failed.
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `admin unlock` was run without a passcode.
    #[error("a passcode is required, pass --passcode")]
    MissingPasscode,

    /// An update command was given no fields to change.
    #[error("nothing to update, pass at least one field")]
    NothingToUpdate,

    /// No dish has the given id.
    #[error("no dish with id {0:?}")]
    UnknownItem(String),
}

/// Directory of the persisted shop document: `--data-dir`, then
/// `SHOP_DATA_DIR`, then `data`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        std::env::var("SHOP_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Open the file-backed store under `data_dir`.
pub fn open_store(data_dir: &Path) -> Arc<ShopDataStore> {
    let store = ShopDataStore::open(FileStorage::new(data_dir));
    tracing::debug!(data_dir = %data_dir.display(), source = ?store.source(), "Opened shop data");
    Arc::new(store)
}
