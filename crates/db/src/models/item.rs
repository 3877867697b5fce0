use artfood_core::item::Item;
use artfood_core::types::{DbId, Timestamp};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::debug_assert_shape;
use crate::queries::ITEM_COLUMNS;

/// A row from the `items` table.
#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for ItemRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        debug_assert_shape(row, ITEM_COLUMNS);
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}
