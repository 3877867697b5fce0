//! Read workflows over the catalog store.
//!
//! Each workflow is an explicit sequence with its own failure branches. The
//! store is injected at construction; there is no process-wide handle.

use std::sync::Arc;

use crate::catalog::{
    AuthorFoodPaintings, CatalogStore, FoodPaintingCount, PaintingDetail, PaintingSummary,
};
use crate::error::CoreError;
use crate::types::DbId;

/// Upper bound on the random sample, regardless of configuration.
pub const MAX_RANDOM_SAMPLE: i64 = 10;

/// Informational message attached to an author with no qualifying paintings.
pub const NO_AUTHOR_PAINTINGS_MESSAGE: &str = "No food-related paintings found for this author";

/// Orchestrates catalog lookups and shapes their payloads.
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn CatalogStore>,
    sample_size: i64,
}

impl LookupService {
    /// Build a service sampling [`MAX_RANDOM_SAMPLE`] paintings per call.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_sample_size(store, MAX_RANDOM_SAMPLE)
    }

    /// Build a service with a custom sample size, clamped to `1..=MAX_RANDOM_SAMPLE`.
    pub fn with_sample_size(store: Arc<dyn CatalogStore>, sample_size: i64) -> Self {
        Self {
            store,
            sample_size: sample_size.clamp(1, MAX_RANDOM_SAMPLE),
        }
    }

    pub fn sample_size(&self) -> i64 {
        self.sample_size
    }

    /// Fetch one painting with its food flag, author and location.
    pub async fn painting_detail(&self, painting_id: DbId) -> Result<PaintingDetail, CoreError> {
        let detail = self
            .store
            .painting_detail(painting_id)
            .await
            .map_err(|e| internal("painting_detail", e))?;

        detail.ok_or_else(|| {
            CoreError::NotFound(format!("No painting found with id: {painting_id}"))
        })
    }

    /// Fetch an author and their food-detected paintings.
    ///
    /// The existence check runs first so that an unknown author (404) stays
    /// distinguishable from a known author with no qualifying paintings
    /// (success with an empty list).
    pub async fn author_food_paintings(
        &self,
        author_id: DbId,
    ) -> Result<AuthorFoodPaintings, CoreError> {
        let author = self
            .store
            .author_summary(author_id)
            .await
            .map_err(|e| internal("author_summary", e))?
            .ok_or_else(|| CoreError::NotFound(format!("No author found with id: {author_id}")))?;

        let paintings = self
            .store
            .author_food_paintings(author_id)
            .await
            .map_err(|e| internal("author_food_paintings", e))?;

        let message = paintings
            .is_empty()
            .then(|| NO_AUTHOR_PAINTINGS_MESSAGE.to_string());

        Ok(AuthorFoodPaintings {
            author,
            total_food_paintings: paintings.len(),
            paintings,
            message,
        })
    }

    /// Sample food-detected paintings at random.
    ///
    /// An empty sample means the catalog holds no food paintings at all,
    /// which is reported as not found.
    pub async fn random_food_paintings(&self) -> Result<Vec<PaintingSummary>, CoreError> {
        let mut paintings = self
            .store
            .random_food_sample(self.sample_size)
            .await
            .map_err(|e| internal("random_food_sample", e))?;

        if paintings.is_empty() {
            return Err(CoreError::NotFound(
                "No paintings with food detected found in database".to_string(),
            ));
        }

        paintings.truncate(self.sample_size as usize);
        Ok(paintings)
    }

    /// Count food-detected paintings. Zero is a valid answer.
    pub async fn food_painting_count(&self) -> Result<FoodPaintingCount, CoreError> {
        let total = self
            .store
            .food_painting_count()
            .await
            .map_err(|e| internal("food_painting_count", e))?;

        Ok(FoodPaintingCount {
            total_paintings_with_food: total.max(0),
        })
    }
}

/// Collapse any store failure into [`CoreError::Internal`].
///
/// Logging happens where the fault originates and again at the HTTP
/// boundary, not here.
fn internal(operation: &'static str, err: CoreError) -> CoreError {
    match err {
        CoreError::Internal(msg) => CoreError::Internal(msg),
        other => CoreError::Internal(format!("{operation}: {other}")),
    }
}
