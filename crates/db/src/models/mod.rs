pub mod catalog;
pub mod item;

use sqlx::postgres::PgRow;
use sqlx::{Column, Row};

/// Assert that a row has exactly the declared columns, in order.
///
/// A mismatch means a query and its row type drifted apart, which is a
/// programming error; debug builds fail loudly instead of mis-mapping.
pub(crate) fn debug_assert_shape(row: &PgRow, expected: &[&str]) {
    debug_assert_eq!(
        row.len(),
        expected.len(),
        "row has {} columns, mapper expects {}",
        row.len(),
        expected.len()
    );
    debug_assert!(
        row.columns()
            .iter()
            .zip(expected)
            .all(|(column, name)| column.name() == *name),
        "row columns {:?} do not match {:?}",
        row.columns().iter().map(|c| c.name()).collect::<Vec<_>>(),
        expected
    );
}
