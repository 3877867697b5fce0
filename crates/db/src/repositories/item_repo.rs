//! Repository for the `items` table.

use artfood_core::error::CoreError;
use artfood_core::item::{escape_like, Item, ItemChanges, ItemStore, NewItem};
use artfood_core::types::DbId;
use async_trait::async_trait;

use super::db_fault;
use crate::queries;
use crate::DbPool;

/// Provides CRUD and search for items.
#[derive(Clone)]
pub struct ItemRepo {
    pool: DbPool,
}

impl ItemRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepo {
    async fn list(&self) -> Result<Vec<Item>, CoreError> {
        let rows = queries::list_items()
            .fetch_all(&self.pool)
            .await
            .map_err(db_fault("list_items"))?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Item>, CoreError> {
        let row = queries::find_item(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_fault("find_item"))?;
        Ok(row.map(Item::from))
    }

    async fn create(&self, item: &NewItem) -> Result<Item, CoreError> {
        let row = queries::insert_item(item.name.clone(), item.description.clone())
            .fetch_one(&self.pool)
            .await
            .map_err(db_fault("insert_item"))?;
        Ok(row.into())
    }

    async fn update(&self, id: DbId, changes: &ItemChanges) -> Result<Option<Item>, CoreError> {
        let row = queries::update_item(id, changes.name.clone(), changes.description.clone())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_fault("update_item"))?;
        Ok(row.map(Item::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let result = queries::delete_item(id)
            .execute(&self.pool)
            .await
            .map_err(db_fault("delete_item"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Item>, CoreError> {
        let rows = queries::search_items(escape_like(term))
            .fetch_all(&self.pool)
            .await
            .map_err(db_fault("search_items"))?;
        Ok(rows.into_iter().map(Item::from).collect())
    }
}
