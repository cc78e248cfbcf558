//! Read-only menu views.
//!
//! # Usage
//!
//! ```bash
//! swift-menu menu list
//! swift-menu menu list --featured
//! swift-menu menu list --category Momos
//! swift-menu menu order momo-1
//! ```

use swift_menu_core::{MenuItem, OrderLinks, ShopDataStore, links::order_message};

use super::CliError;

/// Log the menu with each dish's position, optionally filtered.
///
/// Positions are the indexes the `admin update-item` and `admin remove-item`
/// commands take.
pub fn list(store: &ShopDataStore, featured_only: bool, category: Option<&str>) {
    let data = store.get();
    let mut shown = 0_usize;

    for (index, item) in data.menu_items.iter().enumerate() {
        if featured_only && !item.featured {
            continue;
        }
        if category.is_some_and(|c| !item.category.eq_ignore_ascii_case(c.trim())) {
            continue;
        }
        tracing::info!("{}", describe(index, item));
        shown += 1;
    }

    if shown == 0 {
        tracing::info!("No dishes match");
    }
}

/// Log the order links for one dish.
///
/// # Errors
///
/// Returns [`CliError::UnknownItem`] if no dish has `id`.
pub fn order(store: &ShopDataStore, id: &str) -> Result<(), CliError> {
    let data = store.get();
    let item = data
        .find_item(id)
        .ok_or_else(|| CliError::UnknownItem(id.to_owned()))?;

    let links = OrderLinks::new(&data.shop_info, &item.name);
    tracing::info!("{}", order_message(&item.name));
    tracing::info!("  WhatsApp: {}", links.whatsapp);
    tracing::info!("  SMS:      {}", links.sms);
    tracing::info!("  Call:     {}", links.call);
    Ok(())
}

/// One-line summary of a dish.
pub fn describe(index: usize, item: &MenuItem) -> String {
    let mut line = format!("[{index}] {} - {} \u{20b9}{}", item.id, item.name, item.price);
    if !item.category.is_empty() {
        line.push_str(&format!(" ({})", item.category));
    }
    if item.featured {
        line.push_str(" *featured");
    }
    line
}
