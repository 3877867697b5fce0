//! Route definitions for the painting and author catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes mounted under `/api`.
///
/// ```text
/// GET /painting/{id}          -> get_painting
/// GET /author/{id}            -> get_author
/// GET /paintings/random       -> random_food_paintings
/// GET /paintings/food/random  -> random_food_paintings
/// GET /paintings/food/count   -> food_painting_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/painting/{id}", get(catalog::get_painting))
        .route("/author/{id}", get(catalog::get_author))
        .route("/paintings/random", get(catalog::random_food_paintings))
        .route("/paintings/food/random", get(catalog::random_food_paintings))
        .route("/paintings/food/count", get(catalog::food_painting_count))
}

/// Root-level welcome route.
pub fn welcome_router() -> Router<AppState> {
    Router::new().route("/", get(catalog::welcome))
}
