//! Parameterized SQL for every catalog and item lookup.
//!
//! External input only ever reaches the database as a bound `$n` parameter.
//! Each catalog query pairs its SQL with the column list the row mapper
//! expects, so a drift between the two trips the mapper's shape assertion.

use artfood_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::Postgres;

use crate::models::catalog::{AuthorPaintingRow, AuthorRow, PaintingDetailRow, PaintingSummaryRow};
use crate::models::item::ItemRow;

type Select<Row> = QueryAs<'static, Postgres, Row, PgArguments>;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub const PAINTING_DETAIL_COLUMNS: &[&str] = &[
    "painting_id",
    "title",
    "image_url",
    "creation_date",
    "time_period",
    "food_detected",
    "artist_name",
    "author_country",
    "location_name",
    "location_country",
];

pub const PAINTING_DETAIL_SQL: &str = "\
    SELECT p.painting_id, p.title, p.image_url, p.creation_date, p.time_period, \
           f.food_detected, a.painter AS artist_name, a.author_country, \
           l.location_name, l.location_country \
    FROM paintings p \
    LEFT JOIN food_detected f ON p.painting_id = f.painting_id \
    LEFT JOIN correspondence c ON p.painting_id = c.painting_id \
    LEFT JOIN authors a ON c.author_id = a.author_id \
    LEFT JOIN locations l ON c.location_id = l.location_id \
    WHERE p.painting_id = $1 \
    LIMIT 1";

pub const AUTHOR_COLUMNS: &[&str] = &["painter", "author_country", "date_of_birth"];

pub const AUTHOR_EXISTENCE_SQL: &str = "\
    SELECT painter, author_country, date_of_birth \
    FROM authors \
    WHERE author_id = $1";

pub const AUTHOR_PAINTING_COLUMNS: &[&str] = &[
    "painting_id",
    "title",
    "image_url",
    "creation_date",
    "time_period",
    "artist_name",
    "author_country",
    "location_name",
    "location_country",
];

pub const AUTHOR_FOOD_PAINTINGS_SQL: &str = "\
    SELECT p.painting_id, p.title, p.image_url, p.creation_date, p.time_period, \
           a.painter AS artist_name, a.author_country, \
           l.location_name, l.location_country \
    FROM paintings p \
    JOIN correspondence c ON p.painting_id = c.painting_id \
    JOIN authors a ON c.author_id = a.author_id \
    JOIN food_detected f ON p.painting_id = f.painting_id \
    LEFT JOIN locations l ON c.location_id = l.location_id \
    WHERE c.author_id = $1 \
      AND f.food_detected = 1 \
    ORDER BY p.creation_date ASC";

pub const PAINTING_SUMMARY_COLUMNS: &[&str] = &["painting_id", "title", "image_url"];

pub const RANDOM_FOOD_SAMPLE_SQL: &str = "\
    SELECT p.painting_id, p.title, p.image_url \
    FROM paintings p \
    JOIN food_detected f ON p.painting_id = f.painting_id \
    WHERE f.food_detected = 1 \
    ORDER BY RANDOM() \
    LIMIT $1";

pub const FOOD_PAINTING_COUNT_SQL: &str = "\
    SELECT COUNT(*) \
    FROM paintings p \
    JOIN food_detected f ON p.painting_id = f.painting_id \
    WHERE f.food_detected = 1";

pub fn painting_detail(painting_id: DbId) -> Select<PaintingDetailRow> {
    sqlx::query_as(PAINTING_DETAIL_SQL).bind(painting_id)
}

pub fn author_existence(author_id: DbId) -> Select<AuthorRow> {
    sqlx::query_as(AUTHOR_EXISTENCE_SQL).bind(author_id)
}

pub fn author_food_paintings(author_id: DbId) -> Select<AuthorPaintingRow> {
    sqlx::query_as(AUTHOR_FOOD_PAINTINGS_SQL).bind(author_id)
}

pub fn random_food_sample(limit: i64) -> Select<PaintingSummaryRow> {
    sqlx::query_as(RANDOM_FOOD_SAMPLE_SQL).bind(limit)
}

pub fn food_painting_count() -> QueryScalar<'static, Postgres, i64, PgArguments> {
    sqlx::query_scalar(FOOD_PAINTING_COUNT_SQL)
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

pub const ITEM_COLUMNS: &[&str] = &["id", "name", "description", "created_at"];

pub const LIST_ITEMS_SQL: &str = "\
    SELECT id, name, description, created_at FROM items ORDER BY id";

pub const FIND_ITEM_SQL: &str = "\
    SELECT id, name, description, created_at FROM items WHERE id = $1";

pub const INSERT_ITEM_SQL: &str = "\
    INSERT INTO items (name, description) \
    VALUES ($1, $2) \
    RETURNING id, name, description, created_at";

pub const UPDATE_ITEM_SQL: &str = "\
    UPDATE items SET \
        name = COALESCE($2, name), \
        description = COALESCE($3, description) \
    WHERE id = $1 \
    RETURNING id, name, description, created_at";

pub const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = $1";

pub const SEARCH_ITEMS_SQL: &str = "\
    SELECT id, name, description, created_at FROM items \
    WHERE name ILIKE '%' || $1 || '%' \
       OR description ILIKE '%' || $1 || '%' \
    ORDER BY id";

pub fn list_items() -> Select<ItemRow> {
    sqlx::query_as(LIST_ITEMS_SQL)
}

pub fn find_item(id: DbId) -> Select<ItemRow> {
    sqlx::query_as(FIND_ITEM_SQL).bind(id)
}

pub fn insert_item(name: String, description: String) -> Select<ItemRow> {
    sqlx::query_as(INSERT_ITEM_SQL).bind(name).bind(description)
}

/// `None` fields keep their stored value.
pub fn update_item(id: DbId, name: Option<String>, description: Option<String>) -> Select<ItemRow> {
    sqlx::query_as(UPDATE_ITEM_SQL)
        .bind(id)
        .bind(name)
        .bind(description)
}

pub fn delete_item(id: DbId) -> Query<'static, Postgres, PgArguments> {
    sqlx::query(DELETE_ITEM_SQL).bind(id)
}

/// `term` must already be LIKE-escaped; the wildcards are added in SQL.
pub fn search_items(term: String) -> Select<ItemRow> {
    sqlx::query_as(SEARCH_ITEMS_SQL).bind(term)
}
