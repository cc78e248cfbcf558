//! Outbound deep links built from shop information.
//!
//! Ordering has no backend: a visitor picks WhatsApp, SMS or a phone call and
//! the message is prefilled with the dish name.

use serde::Serialize;

use crate::types::ShopInfo;

/// Build the prefilled order message for a dish.
#[must_use]
pub fn order_message(item_name: &str) -> String {
    format!("Hi! I'd like to order {item_name}")
}

/// Links offered in the order dialog for one dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLinks {
    /// `https://wa.me/{whatsapp}?text=...`
    pub whatsapp: String,
    /// `sms:{phone}?body=...`
    pub sms: String,
    /// `tel:{phone}`
    pub call: String,
}

impl OrderLinks {
    /// Build the order links for `item_name`.
    #[must_use]
    pub fn new(shop: &ShopInfo, item_name: &str) -> Self {
        let message = urlencoding::encode(&order_message(item_name)).into_owned();
        Self {
            whatsapp: format!("{}?text={message}", whatsapp_chat(&shop.whatsapp)),
            sms: format!("sms:{}?body={message}", shop.phone.trim()),
            call: tel(&shop.phone),
        }
    }
}

/// Links shown on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    /// `tel:{phone}`
    pub call: String,
    /// `https://wa.me/{whatsapp}`
    pub whatsapp: String,
    /// `mailto:{email}`
    pub email: String,
}

impl ContactLinks {
    /// Build the contact links for a shop.
    #[must_use]
    pub fn new(shop: &ShopInfo) -> Self {
        Self {
            call: tel(&shop.phone),
            whatsapp: whatsapp_chat(&shop.whatsapp),
            email: format!("mailto:{}", shop.email.trim()),
        }
    }
}

fn tel(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

fn whatsapp_chat(number: &str) -> String {
    format!("https://wa.me/{}", number.trim())
}
