//! Row shapes for the catalog queries and their mapping into domain records.
//!
//! Rows are read by column name. NULLs become `None`; the raw 0/1 food flag
//! is kept as-is until conversion so a missing annotation stays unknown.

use artfood_core::catalog::{
    food_flag, AuthorPainting, AuthorSummary, PaintingDetail, PaintingSummary,
};
use artfood_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::debug_assert_shape;
use crate::queries::{
    AUTHOR_COLUMNS, AUTHOR_PAINTING_COLUMNS, PAINTING_DETAIL_COLUMNS, PAINTING_SUMMARY_COLUMNS,
};

/// A row of the painting detail query.
#[derive(Debug, Clone)]
pub struct PaintingDetailRow {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
    pub creation_date: String,
    pub time_period: Option<String>,
    pub food_detected: Option<i16>,
    pub artist_name: Option<String>,
    pub author_country: Option<String>,
    pub location_name: Option<String>,
    pub location_country: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for PaintingDetailRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        debug_assert_shape(row, PAINTING_DETAIL_COLUMNS);
        Ok(Self {
            painting_id: row.try_get("painting_id")?,
            title: row.try_get("title")?,
            image_url: row.try_get("image_url")?,
            creation_date: row.try_get("creation_date")?,
            time_period: row.try_get("time_period")?,
            food_detected: row.try_get("food_detected")?,
            artist_name: row.try_get("artist_name")?,
            author_country: row.try_get("author_country")?,
            location_name: row.try_get("location_name")?,
            location_country: row.try_get("location_country")?,
        })
    }
}

impl From<PaintingDetailRow> for PaintingDetail {
    fn from(row: PaintingDetailRow) -> Self {
        Self {
            painting_id: row.painting_id,
            title: row.title,
            image_url: row.image_url,
            creation_date: row.creation_date,
            time_period: row.time_period,
            contains_food: food_flag(row.food_detected),
            artist: row.artist_name,
            artist_country: row.author_country,
            location: row.location_name,
            location_country: row.location_country,
        }
    }
}

/// A row of the author existence check. The id is the one that was queried.
#[derive(Debug, Clone)]
pub struct AuthorRow {
    pub painter: String,
    pub author_country: Option<String>,
    pub date_of_birth: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for AuthorRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        debug_assert_shape(row, AUTHOR_COLUMNS);
        Ok(Self {
            painter: row.try_get("painter")?,
            author_country: row.try_get("author_country")?,
            date_of_birth: row.try_get("date_of_birth")?,
        })
    }
}

impl AuthorRow {
    pub fn into_summary(self, author_id: DbId) -> AuthorSummary {
        AuthorSummary {
            id: author_id,
            name: self.painter,
            country: self.author_country,
            birth_date: self.date_of_birth,
        }
    }
}

/// A row of the author food paintings query.
#[derive(Debug, Clone)]
pub struct AuthorPaintingRow {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
    pub creation_date: String,
    pub time_period: Option<String>,
    pub artist_name: String,
    pub author_country: Option<String>,
    pub location_name: Option<String>,
    pub location_country: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for AuthorPaintingRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        debug_assert_shape(row, AUTHOR_PAINTING_COLUMNS);
        Ok(Self {
            painting_id: row.try_get("painting_id")?,
            title: row.try_get("title")?,
            image_url: row.try_get("image_url")?,
            creation_date: row.try_get("creation_date")?,
            time_period: row.try_get("time_period")?,
            artist_name: row.try_get("artist_name")?,
            author_country: row.try_get("author_country")?,
            location_name: row.try_get("location_name")?,
            location_country: row.try_get("location_country")?,
        })
    }
}

impl From<AuthorPaintingRow> for AuthorPainting {
    fn from(row: AuthorPaintingRow) -> Self {
        Self {
            painting_id: row.painting_id,
            title: row.title,
            image_url: row.image_url,
            creation_date: row.creation_date,
            time_period: row.time_period,
            artist_name: row.artist_name,
            artist_country: row.author_country,
            location_name: row.location_name,
            location_country: row.location_country,
        }
    }
}

/// A row of the random food sample.
#[derive(Debug, Clone)]
pub struct PaintingSummaryRow {
    pub painting_id: DbId,
    pub title: String,
    pub image_url: String,
}

impl<'r> FromRow<'r, PgRow> for PaintingSummaryRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        debug_assert_shape(row, PAINTING_SUMMARY_COLUMNS);
        Ok(Self {
            painting_id: row.try_get("painting_id")?,
            title: row.try_get("title")?,
            image_url: row.try_get("image_url")?,
        })
    }
}

impl From<PaintingSummaryRow> for PaintingSummary {
    fn from(row: PaintingSummaryRow) -> Self {
        Self {
            painting_id: row.painting_id,
            title: row.title,
            image_url: row.image_url,
        }
    }
}
