//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Item, NewItem};

/// Create item request. `name` is optional here so that a missing field
/// becomes a validation error instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
}

/// GET /api/items - list every item, in storage order
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// POST /api/items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(req) = payload?;
    let item = NewItem::new(req.name)?;
    let created = state.store.create(item).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/items", get(list_items).post(create_item))
}
