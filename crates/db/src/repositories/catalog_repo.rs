//! Read-only repository for paintings, authors and food annotations.

use artfood_core::catalog::{
    AuthorPainting, AuthorSummary, CatalogStore, PaintingDetail, PaintingSummary,
};
use artfood_core::error::CoreError;
use artfood_core::types::DbId;
use async_trait::async_trait;

use super::db_fault;
use crate::queries;
use crate::DbPool;

/// Provides data access for the catalog tables.
#[derive(Clone)]
pub struct CatalogRepo {
    pool: DbPool,
}

impl CatalogRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for CatalogRepo {
    async fn painting_detail(
        &self,
        painting_id: DbId,
    ) -> Result<Option<PaintingDetail>, CoreError> {
        let row = queries::painting_detail(painting_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_fault("painting_detail"))?;

        tracing::debug!(painting_id, found = row.is_some(), "Painting detail lookup");
        Ok(row.map(PaintingDetail::from))
    }

    async fn author_summary(&self, author_id: DbId) -> Result<Option<AuthorSummary>, CoreError> {
        let row = queries::author_existence(author_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_fault("author_existence"))?;

        Ok(row.map(|r| r.into_summary(author_id)))
    }

    async fn author_food_paintings(
        &self,
        author_id: DbId,
    ) -> Result<Vec<AuthorPainting>, CoreError> {
        let rows = queries::author_food_paintings(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_fault("author_food_paintings"))?;

        tracing::debug!(author_id, count = rows.len(), "Author food paintings lookup");
        Ok(rows.into_iter().map(AuthorPainting::from).collect())
    }

    async fn random_food_sample(&self, limit: i64) -> Result<Vec<PaintingSummary>, CoreError> {
        let rows = queries::random_food_sample(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(db_fault("random_food_sample"))?;

        Ok(rows.into_iter().map(PaintingSummary::from).collect())
    }

    async fn food_painting_count(&self) -> Result<i64, CoreError> {
        queries::food_painting_count()
            .fetch_one(&self.pool)
            .await
            .map_err(db_fault("food_painting_count"))
    }
}
