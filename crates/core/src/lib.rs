//! Swift Menu Core - the shop document and its store.
//!
//! This crate provides everything shared across the Swift Menu components:
//! - `storefront` - Public menu, contact and ordering pages
//! - `admin` - Passcode-gated editor for the shop document
//! - `cli` - Command-line front end for the admin editor
//!
//! # Architecture
//!
//! The whole persisted state is one JSON document, [`ShopData`]. It lives in a
//! [`ShopDataStore`] which owns a [`KeyValueStorage`] adapter. Consumers read
//! snapshots with `get()`; the admin editor is the only caller of `replace()`.
//!
//! # Modules
//!
//! - [`types`] - The shop document and newtypes for ids, slugs and prices
//! - [`validate`] - Commit-time checks on menu items
//! - [`schema`] - Shape check for persisted and imported documents
//! - [`links`] - WhatsApp, SMS, phone and email deep links
//! - [`storage`] - File-backed and in-memory key/value adapters
//! - [`store`] - The document store
//! - [`default_data`] - The bundled default document

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod default_data;
pub mod links;
pub mod schema;
pub mod storage;
pub mod store;
pub mod types;
pub mod validate;

pub use default_data::{DEFAULT_SHOP_DATA_JSON, default_shop_data};
pub use links::{ContactLinks, OrderLinks};
pub use schema::{ShapeError, check_shape, parse_document};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{DataSource, SHOP_DATA_KEY, ShopDataStore};
pub use types::*;
pub use validate::{ValidationError, validate_menu_items, validate_new_item};
