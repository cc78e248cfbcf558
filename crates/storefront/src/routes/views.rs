//! Display data shared by page templates.

use swift_menu_core::{MenuItem, ShopInfo};

use crate::images::ImageResolver;

/// Shop details shown in the header and footer of every page.
#[derive(Clone)]
pub struct ShopView {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub short_address: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: String,
    pub social_links: Vec<SocialLinkView>,
}

/// A labelled social profile link.
#[derive(Clone)]
pub struct SocialLinkView {
    pub label: String,
    pub url: String,
}

impl From<&ShopInfo> for ShopView {
    fn from(shop: &ShopInfo) -> Self {
        let social_links = shop
            .social_media
            .as_ref()
            .map(|social| {
                social
                    .links()
                    .into_iter()
                    .map(|(label, url)| SocialLinkView {
                        label: label.to_string(),
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: shop.name.clone(),
            tagline: shop.tagline.clone(),
            address: shop.address.clone(),
            short_address: shop.short_address().to_string(),
            phone: shop.phone.clone(),
            email: shop.email.clone(),
            opening_hours: shop.opening_hours.clone(),
            social_links,
        }
    }
}

/// A dish card.
#[derive(Clone)]
pub struct MenuCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub featured: bool,
    /// `None` renders the card without a picture.
    pub image_url: Option<String>,
    pub order_url: String,
}

impl MenuCardView {
    /// Build a card, resolving the item's image.
    pub async fn build(item: &MenuItem, images: &ImageResolver) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_price(item),
            category: item.category.clone(),
            featured: item.featured,
            image_url: images.resolve(&item.image).await,
            order_url: order_url(item.id.as_str()),
        }
    }
}

/// Build cards for `items`, preserving order.
pub async fn menu_cards<'a>(
    items: impl IntoIterator<Item = &'a MenuItem>,
    images: &ImageResolver,
) -> Vec<MenuCardView> {
    let mut cards = Vec::new();
    for item in items {
        cards.push(MenuCardView::build(item, images).await);
    }
    cards
}

/// Format a price for display, e.g. `₹120`.
fn format_price(item: &MenuItem) -> String {
    format!("₹{}", item.price)
}

/// Path of the order dialog for a dish.
pub fn order_url(id: &str) -> String {
    format!("/menu/{}/order", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use swift_menu_core::{MenuItemId, Price, SocialMedia};

    use super::*;

    #[test]
    fn test_order_url_encodes_id() {
        assert_eq!(order_url("momo-1"), "/menu/momo-1/order");
        assert_eq!(order_url("veg roll"), "/menu/veg%20roll/order");
    }

    #[test]
    fn test_format_price() {
        let item = MenuItem {
            id: MenuItemId::new("chai-1"),
            name: "Masala Chai".to_string(),
            price: Price::from_units(40),
            ..MenuItem::default()
        };
        assert_eq!(format_price(&item), "₹40");
    }

    #[test]
    fn test_shop_view_skips_empty_social_links() {
        let shop = ShopInfo {
            name: "Swift Menu Kitchen".to_string(),
            address: "12 Market Road, Lakeside".to_string(),
            social_media: Some(SocialMedia {
                facebook: Some("https://facebook.com/swiftmenu".to_string()),
                instagram: Some(String::new()),
                twitter: None,
            }),
            ..ShopInfo::default()
        };

        let view = ShopView::from(&shop);
        assert_eq!(view.short_address, "12 Market Road");
        assert_eq!(view.social_links.len(), 1);
        assert!(view.social_links.iter().all(|l| l.label == "Facebook"));
    }
}
