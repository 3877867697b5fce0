//! Catalog records and the read-only store seam.
//!
//! Paintings, authors, locations, correspondence and food annotations are
//! externally managed rows. Nothing in this module writes to them.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Full detail for a single painting, including every joined group.
///
/// Optional joins that yield no match surface as `null`, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintingDetail {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
    pub creation_date: String,
    pub time_period: Option<String>,
    /// `None` when no food annotation row exists for the painting.
    pub contains_food: Option<bool>,
    pub artist: Option<String>,
    pub artist_country: Option<String>,
    pub location: Option<String>,
    pub location_country: Option<String>,
}

/// Author header returned alongside an author's paintings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub id: DbId,
    pub name: String,
    pub country: Option<String>,
    pub birth_date: Option<String>,
}

/// One food-detected painting attributed to an author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorPainting {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
    pub creation_date: String,
    pub time_period: Option<String>,
    pub artist_name: String,
    pub artist_country: Option<String>,
    pub location_name: Option<String>,
    pub location_country: Option<String>,
}

/// Response for the author lookup.
///
/// `message` is only present when the author exists but has no qualifying
/// paintings; that case is still a success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorFoodPaintings {
    pub author: AuthorSummary,
    pub total_food_paintings: usize,
    pub paintings: Vec<AuthorPainting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Minimal painting card used by the random sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintingSummary {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
}

/// Aggregate count of food-detected paintings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodPaintingCount {
    pub total_paintings_with_food: i64,
}

// ---------------------------------------------------------------------------
// Row mapping helpers
// ---------------------------------------------------------------------------

/// Coerce a stored 0/1 food flag into a tri-state.
///
/// A missing annotation row (`None`) stays unknown rather than becoming
/// `false`. Any non-zero value counts as detected.
pub fn food_flag(raw: Option<i16>) -> Option<bool> {
    raw.map(|v| v != 0)
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Read access to the catalog tables.
///
/// Implementations translate driver faults into [`CoreError::Internal`].
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Painting joined with its food flag, author and location. At most one row.
    async fn painting_detail(&self, painting_id: DbId)
        -> Result<Option<PaintingDetail>, CoreError>;

    /// Author name, country and birth date, or `None` when the id is unknown.
    async fn author_summary(&self, author_id: DbId) -> Result<Option<AuthorSummary>, CoreError>;

    /// Food-detected paintings by one author, oldest creation date first.
    async fn author_food_paintings(
        &self,
        author_id: DbId,
    ) -> Result<Vec<AuthorPainting>, CoreError>;

    /// Random sample of food-detected paintings, at most `limit` rows.
    async fn random_food_sample(&self, limit: i64) -> Result<Vec<PaintingSummary>, CoreError>;

    /// Number of paintings whose food flag is set.
    async fn food_painting_count(&self) -> Result<i64, CoreError>;
}
