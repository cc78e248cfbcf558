//! The shop document: shop information plus the ordered menu.

use serde::{Deserialize, Serialize};

use super::id::{ImageSlug, MenuItemId};
use super::price::Price;

/// Optional social profile links shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialMedia {
    /// Non-empty links as `(label, url)` pairs, in display order.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("Twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.filter(|u| !u.trim().is_empty()).map(|u| (label, u))
        })
        .collect()
    }
}

/// Public shop information. All fields are free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    /// WhatsApp number in international format without `+`.
    pub whatsapp: String,
    pub email: String,
    pub opening_hours: String,
    pub map_embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

impl ShopInfo {
    /// First segment of the address, used for compact summaries.
    #[must_use]
    pub fn short_address(&self) -> &str {
        self.address
            .split(',')
            .next()
            .map_or("", str::trim)
    }

    /// Apply a partial update. `None` fields are left untouched.
    pub fn apply(&mut self, patch: ShopInfoPatch) {
        let ShopInfoPatch {
            name,
            tagline,
            address,
            phone,
            whatsapp,
            email,
            opening_hours,
            map_embed_url,
            facebook,
            instagram,
            twitter,
        } = patch;

        set_if_some(&mut self.name, name);
        set_if_some(&mut self.tagline, tagline);
        set_if_some(&mut self.address, address);
        set_if_some(&mut self.phone, phone);
        set_if_some(&mut self.whatsapp, whatsapp);
        set_if_some(&mut self.email, email);
        set_if_some(&mut self.opening_hours, opening_hours);
        set_if_some(&mut self.map_embed_url, map_embed_url);

        // Social links merge into whatever is already there.
        if facebook.is_some() || instagram.is_some() || twitter.is_some() {
            let social = self.social_media.get_or_insert_with(SocialMedia::default);
            if facebook.is_some() {
                social.facebook = facebook;
            }
            if instagram.is_some() {
                social.instagram = instagram;
            }
            if twitter.is_some() {
                social.twitter = twitter;
            }
        }
    }
}

/// Partial update for [`ShopInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopInfoPatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub opening_hours: Option<String>,
    pub map_embed_url: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

impl ShopInfoPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A single dish on the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique across the menu once committed.
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image file stem, resolved by the presentation layer.
    pub image: ImageSlug,
    pub category: String,
    /// Highlighted on the home page.
    pub featured: bool,
}

impl MenuItem {
    /// Apply a partial update. `None` fields are left untouched.
    pub fn apply(&mut self, patch: MenuItemPatch) {
        let MenuItemPatch {
            id,
            name,
            description,
            price,
            image,
            category,
            featured,
        } = patch;

        set_if_some(&mut self.id, id);
        set_if_some(&mut self.name, name);
        set_if_some(&mut self.description, description);
        set_if_some(&mut self.price, price);
        set_if_some(&mut self.image, image);
        set_if_some(&mut self.category, category);
        set_if_some(&mut self.featured, featured);
    }
}

/// Partial update for [`MenuItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemPatch {
    pub id: Option<MenuItemId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image: Option<ImageSlug>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl MenuItemPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The whole shop document. This is the only persisted entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopData {
    pub shop_info: ShopInfo,
    pub menu_items: Vec<MenuItem>,
}

impl ShopData {
    /// Items flagged for the home page, in menu order.
    pub fn featured_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu_items.iter().filter(|item| item.featured)
    }

    /// Distinct categories in the order they first appear.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.menu_items {
            let category = item.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Items in the given category (case-insensitive match).
    pub fn items_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.menu_items
            .iter()
            .filter(move |item| item.category.eq_ignore_ascii_case(category))
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id.as_str() == id)
    }
}

fn set_if_some<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, featured: bool) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: format!("Dish {id}"),
            category: category.to_string(),
            featured,
            ..MenuItem::default()
        }
    }

    #[test]
    fn test_shop_data_uses_camel_case_fields() {
        let data = ShopData {
            shop_info: ShopInfo {
                opening_hours: "9-5".to_string(),
                ..ShopInfo::default()
            },
            menu_items: vec![item("a", "Momos", true)],
        };

        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("shopInfo").is_some());
        assert!(value.get("menuItems").unwrap().is_array());
        assert_eq!(value["shopInfo"]["openingHours"], "9-5");
        assert!(value["shopInfo"].get("socialMedia").is_none());
    }

    #[test]
    fn test_featured_items_keep_order() {
        let data = ShopData {
            shop_info: ShopInfo::default(),
            menu_items: vec![
                item("a", "Momos", true),
                item("b", "Momos", false),
                item("c", "Rolls", true),
            ],
        };

        let ids: Vec<&str> = data.featured_items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let data = ShopData {
            shop_info: ShopInfo::default(),
            menu_items: vec![
                item("a", "Rolls", false),
                item("b", "Momos", false),
                item("c", "Rolls", false),
                item("d", "", false),
            ],
        };

        assert_eq!(data.categories(), vec!["Rolls", "Momos"]);
        assert_eq!(data.items_in_category("rolls").count(), 2);
    }

    #[test]
    fn test_short_address() {
        let info = ShopInfo {
            address: "12 Market Road, Lakeside, Pokhara".to_string(),
            ..ShopInfo::default()
        };
        assert_eq!(info.short_address(), "12 Market Road");

        let empty = ShopInfo::default();
        assert_eq!(empty.short_address(), "");
    }

    #[test]
    fn test_shop_info_patch_merges_social_links() {
        let mut info = ShopInfo {
            phone: "111".to_string(),
            social_media: Some(SocialMedia {
                facebook: Some("fb".to_string()),
                ..SocialMedia::default()
            }),
            ..ShopInfo::default()
        };

        info.apply(ShopInfoPatch {
            phone: Some("222".to_string()),
            instagram: Some("ig".to_string()),
            ..ShopInfoPatch::default()
        });

        assert_eq!(info.phone, "222");
        let social = info.social_media.unwrap();
        assert_eq!(social.facebook.as_deref(), Some("fb"));
        assert_eq!(social.instagram.as_deref(), Some("ig"));
        assert!(social.twitter.is_none());
    }

    #[test]
    fn test_menu_item_patch_only_touches_given_fields() {
        let mut dish = item("momo-1", "Momos", true);
        dish.apply(MenuItemPatch {
            price: Some(Price::from_units(130)),
            featured: Some(false),
            ..MenuItemPatch::default()
        });

        assert_eq!(dish.id.as_str(), "momo-1");
        assert_eq!(dish.price, Price::from_units(130));
        assert!(!dish.featured);
        assert_eq!(dish.category, "Momos");
    }

    #[test]
    fn test_social_links_skip_blank() {
        let social = SocialMedia {
            facebook: Some("https://facebook.com/x".to_string()),
            instagram: Some("  ".to_string()),
            twitter: None,
        };
        assert_eq!(social.links(), vec![("Facebook", "https://facebook.com/x")]);
    }
}
