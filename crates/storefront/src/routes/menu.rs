//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use super::views::{MenuCardView, ShopView, menu_cards};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Menu query parameters.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Show only this category. Blank means every dish.
    pub category: Option<String>,
}

/// A category filter tab.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub url: String,
    pub active: bool,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub shop: ShopView,
    pub categories: Vec<CategoryView>,
    /// True when no category filter is applied.
    pub showing_all: bool,
    pub items: Vec<MenuCardView>,
}

/// Display the menu, optionally filtered to one category.
///
/// An unknown category is a 404.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<MenuTemplate> {
    let data = state.shop();
    let selected = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let categories: Vec<CategoryView> = data
        .categories()
        .into_iter()
        .map(|name| CategoryView {
            name: name.to_string(),
            url: format!("/menu?category={}", urlencoding::encode(name)),
            active: selected.is_some_and(|s| s.eq_ignore_ascii_case(name)),
        })
        .collect();

    let items = match selected {
        Some(category) => {
            if !categories.iter().any(|c| c.active) {
                return Err(AppError::NotFound(format!("menu category {category}")));
            }
            menu_cards(data.items_in_category(category), state.images()).await
        }
        None => menu_cards(&data.menu_items, state.images()).await,
    };

    Ok(MenuTemplate {
        shop: ShopView::from(&data.shop_info),
        categories,
        showing_all: selected.is_none(),
        items,
    })
}
