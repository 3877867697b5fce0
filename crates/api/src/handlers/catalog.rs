//! Handlers for the read-only painting and author catalog.

use artfood_core::types::DbId;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /
///
/// Welcome payload listing the public catalog endpoints.
pub async fn welcome() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the Food in Art API",
        "endpoints": {
            "random_food_paintings": "/api/paintings/random - Get 10 random paintings containing food",
            "food_painting_count": "/api/paintings/food/count - Count paintings containing food",
            "painting_details": "/api/painting/<id> - Get details of a specific painting",
            "author_details": "/api/author/<id> - Get details of a specific author and their food-related paintings",
        }
    }))
}

/// GET /api/painting/{id}
pub async fn get_painting(
    State(state): State<AppState>,
    ApiPath(painting_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let painting = state.lookup.painting_detail(painting_id).await?;

    Ok(Json(painting))
}

/// GET /api/author/{id}
///
/// Unknown authors are a 404; a known author with no food paintings is a
/// 200 with an empty list and a `message`.
pub async fn get_author(
    State(state): State<AppState>,
    ApiPath(author_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let response = state.lookup.author_food_paintings(author_id).await?;

    tracing::debug!(
        author_id,
        total = response.total_food_paintings,
        "Author food paintings served",
    );

    Ok(Json(response))
}

/// GET /api/paintings/random
/// GET /api/paintings/food/random
pub async fn random_food_paintings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let paintings = state.lookup.random_food_paintings().await?;

    Ok(Json(paintings))
}

/// GET /api/paintings/food/count
pub async fn food_painting_count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = state.lookup.food_painting_count().await?;

    Ok(Json(count))
}
