//! Row mappers must reject result sets whose columns drift from their
//! declared shape. The check is a debug assertion, so these only fail in
//! debug builds (the default for `cargo test`).
//!
//! Requires a PostgreSQL `DATABASE_URL`; run with `cargo test -- --ignored`.

use artfood_db::models::catalog::PaintingSummaryRow;
use artfood_db::models::item::ItemRow;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn well_formed_summary_row_maps(pool: PgPool) {
    let row: PaintingSummaryRow = sqlx::query_as(
        "SELECT 7::BIGINT AS painting_id, 'Still Life' AS title, 'https://img.example/7.jpg' AS image_url",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(row.painting_id, 7);
    assert_eq!(row.title, "Still Life");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
#[should_panic(expected = "mapper expects")]
async fn summary_row_missing_a_column_panics(pool: PgPool) {
    let _ = sqlx::query_as::<_, PaintingSummaryRow>(
        "SELECT 7::BIGINT AS painting_id, 'Still Life' AS title",
    )
    .fetch_one(&pool)
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
#[should_panic(expected = "mapper expects")]
async fn summary_row_with_extra_column_panics(pool: PgPool) {
    let _ = sqlx::query_as::<_, PaintingSummaryRow>(
        "SELECT 7::BIGINT AS painting_id, 'Still Life' AS title, \
                'https://img.example/7.jpg' AS image_url, 'Baroque' AS time_period",
    )
    .fetch_one(&pool)
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
#[should_panic(expected = "do not match")]
async fn summary_row_with_reordered_columns_panics(pool: PgPool) {
    // Same names and types, so a by-name read alone would succeed.
    let _ = sqlx::query_as::<_, PaintingSummaryRow>(
        "SELECT 7::BIGINT AS painting_id, 'https://img.example/7.jpg' AS image_url, \
                'Still Life' AS title",
    )
    .fetch_one(&pool)
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
#[should_panic(expected = "do not match")]
async fn item_row_with_reordered_columns_panics(pool: PgPool) {
    sqlx::query("INSERT INTO items (name, description) VALUES ('Bread', 'Rye')")
        .execute(&pool)
        .await
        .unwrap();

    let _ = sqlx::query_as::<_, ItemRow>("SELECT id, description, name, created_at FROM items")
        .fetch_all(&pool)
        .await;
}
