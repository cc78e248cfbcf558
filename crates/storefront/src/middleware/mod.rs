//! Middleware for the storefront.
//!
//! - `refresh` - Reload shop data committed by another process

pub mod refresh;

pub use refresh::{refresh_shop_data, reload_store};
