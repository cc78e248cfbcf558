//! Contact page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use swift_menu_core::ContactLinks;
use tracing::instrument;

use super::views::ShopView;
use crate::filters;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub shop: ShopView,
    pub links: ContactLinks,
    /// Map iframe source; empty hides the map.
    pub map_embed_url: String,
}

/// Display call, WhatsApp and email links, the address and the map.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.shop();

    ContactTemplate {
        links: ContactLinks::new(&data.shop_info),
        map_embed_url: data.shop_info.map_embed_url.trim().to_string(),
        shop: ShopView::from(&data.shop_info),
    }
}
