//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::{MenuCardView, ShopView, menu_cards};
use crate::filters;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shop: ShopView,
    /// Dishes flagged as featured, in menu order.
    pub featured: Vec<MenuCardView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.shop();
    let featured = menu_cards(data.featured_items(), state.images()).await;

    HomeTemplate {
        shop: ShopView::from(&data.shop_info),
        featured,
    }
}
