//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured dishes)
//! GET  /health                 - Health check
//!
//! # Menu
//! GET  /menu                   - Every dish
//! GET  /menu?category=Momos    - One category
//! GET  /menu/{id}/order        - Order dialog (WhatsApp, SMS, call)
//!
//! # Contact
//! GET  /contact                - Contact links, address and map
//!
//! # API
//! GET  /api/shop               - Current shop document as JSON
//! ```

pub mod api;
pub mod contact;
pub mod home;
pub mod menu;
pub mod order;
pub mod views;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index))
        .route("/{id}/order", get(order::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/health", get(health))
        // Menu routes
        .nest("/menu", menu_routes())
        .route("/contact", get(contact::show))
        // JSON API
        .route("/api/shop", get(api::shop))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
