//! Swift Menu Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod images;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::images::ASSETS_PREFIX;
use crate::state::AppState;

/// Build the storefront router.
///
/// Serves the pages, the JSON API, menu images under `/assets` and
/// stylesheets under `/static`. Sentry layers are added by the binary.
///
/// With `refresh_on_request` set, every route reloads the persisted shop
/// document first, so edits saved by the CLI show up on the next request.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config().assets_dir);
    let stylesheets = ServeDir::new(&state.config().static_dir);

    let mut pages = routes::routes();
    if state.config().refresh_on_request {
        pages = pages.route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::refresh_shop_data,
        ));
    }

    Router::new()
        .merge(pages)
        .nest_service(ASSETS_PREFIX, assets)
        .nest_service("/static", stylesheets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
