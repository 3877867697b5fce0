use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes mounted at `/api/items`.
///
/// ```text
/// GET    /       -> list_items
/// POST   /       -> create_item
/// GET    /{id}   -> get_item
/// PUT    /{id}   -> update_item
/// DELETE /{id}   -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
