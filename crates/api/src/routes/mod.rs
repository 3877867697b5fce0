pub mod catalog;
pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /painting/{id}                 painting detail
/// /author/{id}                   author with food paintings
/// /paintings/random              random food sample
/// /paintings/food/random         random food sample (alias)
/// /paintings/food/count          food painting count
///
/// /items                         list, create
/// /items/{id}                    get, update, delete
/// /search?q=                     item search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/items", items::router())
        .route("/search", get(handlers::items::search_items))
}
