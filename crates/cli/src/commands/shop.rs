//! Read-only view of the shop information.

use swift_menu_core::ShopDataStore;

/// Log the current shop information.
pub fn show(store: &ShopDataStore) {
    let info = store.get().shop_info;

    tracing::info!("{}", info.name);
    tracing::info!("  {}", info.tagline);
    tracing::info!("  Address:       {}", info.address);
    tracing::info!("  Phone:         {}", info.phone);
    tracing::info!("  WhatsApp:      {}", info.whatsapp);
    tracing::info!("  Email:         {}", info.email);
    tracing::info!("  Opening hours: {}", info.opening_hours);
    if !info.map_embed_url.trim().is_empty() {
        tracing::info!("  Map:           {}", info.map_embed_url);
    }
    if let Some(social) = &info.social_media {
        for (label, url) in social.links() {
            tracing::info!("  {label}: {url}");
        }
    }
}
