//! Handlers for the generic item CRUD demo and item search.

use artfood_core::error::CoreError;
use artfood_core::item::{CreateItem, Item, UpdateItem};
use artfood_core::types::DbId;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

fn item_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound(format!("No item found with id: {id}")))
}

/// Fetch an item or fail with 404.
async fn ensure_item_exists(state: &AppState, id: DbId) -> AppResult<Item> {
    state
        .items
        .find_by_id(id)
        .await?
        .ok_or_else(|| item_not_found(id))
}

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.items.list().await?;

    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ensure_item_exists(&state, id).await?;

    Ok(Json(item))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateItem>,
) -> AppResult<impl IntoResponse> {
    let new_item = input.validate()?;
    let item = state.items.create(&new_item).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/items/{id}
///
/// Only fields present in the body are changed.
pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    let changes = input.validate()?;
    let item = state
        .items
        .update(id, &changes)
        .await?
        .ok_or_else(|| item_not_found(id))?;

    tracing::info!(item_id = id, "Item updated");

    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.items.delete(id).await? {
        return Err(item_not_found(id));
    }

    tracing::info!(item_id = id, "Item deleted");

    Ok(Json(json!({ "message": format!("Item {id} deleted") })))
}

/// GET /api/search?q=term
///
/// Case-insensitive substring match on item name or description.
pub async fn search_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let items = state.items.search(&params.q).await?;

    tracing::debug!(query = %params.q, results = items.len(), "Item search");

    Ok(Json(items))
}
