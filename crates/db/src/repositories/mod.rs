//! Repository layer: store trait implementations over the PostgreSQL pool.

pub mod catalog_repo;
pub mod item_repo;

pub use catalog_repo::CatalogRepo;
pub use item_repo::ItemRepo;

use artfood_core::error::CoreError;

/// Convert a driver fault into the domain's internal error.
///
/// The raw driver text is logged here and carried in the error; the HTTP
/// layer decides what reaches the client.
pub(crate) fn db_fault(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(operation, error = %err, "Database query failed");
        CoreError::Internal(format!("{operation}: {err}"))
    }
}
