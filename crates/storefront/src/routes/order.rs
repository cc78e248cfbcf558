//! Order dialog route handler.
//!
//! There is no checkout: the dialog offers WhatsApp, SMS and call links with
//! the dish name prefilled.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use swift_menu_core::{OrderLinks, links::order_message};
use tracing::instrument;

use super::views::{MenuCardView, ShopView};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Order dialog template.
#[derive(Template, WebTemplate)]
#[template(path = "order.html")]
pub struct OrderTemplate {
    pub shop: ShopView,
    pub item: MenuCardView,
    /// The prefilled message, unencoded.
    pub message: String,
    pub links: OrderLinks,
}

/// Display the order dialog for one dish.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<OrderTemplate> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("menu item id is required".to_string()));
    }

    let data = state.shop();
    let item = data
        .find_item(id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;

    add_breadcrumb("order", "Opened order dialog", &[("menu_item_id", id)]);

    Ok(OrderTemplate {
        message: order_message(&item.name),
        links: OrderLinks::new(&data.shop_info, &item.name),
        item: MenuCardView::build(item, state.images()).await,
        shop: ShopView::from(&data.shop_info),
    })
}
