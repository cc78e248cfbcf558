//! The shop document bundled with the application.

use std::sync::LazyLock;

use crate::schema::parse_document;
use crate::types::ShopData;

/// Raw JSON of the bundled default document.
pub const DEFAULT_SHOP_DATA_JSON: &str = include_str!("../data/shop_data.json");

static DEFAULT_SHOP_DATA: LazyLock<ShopData> = LazyLock::new(|| {
    parse_document(DEFAULT_SHOP_DATA_JSON).expect("bundled shop_data.json is a valid shop document")
});

/// A fresh copy of the bundled default document.
#[must_use]
pub fn default_shop_data() -> ShopData {
    DEFAULT_SHOP_DATA.clone()
}
