//! JSON API route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Return the current shop document.
///
/// GET /api/shop
///
/// The body has the same `{ shopInfo, menuItems }` shape as the persisted
/// document and as admin exports.
#[instrument(skip(state))]
pub async fn shop(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let document = serde_json::to_value(state.shop())
        .map_err(|e| AppError::Internal(format!("failed to encode shop data: {e}")))?;
    Ok(Json(document))
}
