//! Generic item records, input validation, and the item store seam.
//!
//! Items are the only entity this service writes. Identifiers and creation
//! timestamps are assigned by the database at insert time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Maximum length of an item name.
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// A stored item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Request body for `POST /api/items`.
///
/// `name` is optional at the wire level so a missing name is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for `PUT /api/items/{id}`. Only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

/// Validated partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an item name: non-blank, bounded length. Returns the trimmed name.
pub fn validate_item_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }
    if trimmed.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_ITEM_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

impl CreateItem {
    /// Check presence of `name` and default `description` to empty.
    pub fn validate(self) -> Result<NewItem, CoreError> {
        let name = match self.name.as_deref() {
            Some(name) => validate_item_name(name)?,
            None => return Err(CoreError::Validation("Name is required".to_string())),
        };

        Ok(NewItem {
            name,
            description: self.description.unwrap_or_default(),
        })
    }
}

impl UpdateItem {
    /// Reject empty updates and blank names.
    pub fn validate(self) -> Result<ItemChanges, CoreError> {
        if self.name.is_none() && self.description.is_none() {
            return Err(CoreError::Validation("No fields to update".to_string()));
        }

        let name = self.name.as_deref().map(validate_item_name).transpose()?;

        Ok(ItemChanges {
            name,
            description: self.description,
        })
    }
}

/// Escape `LIKE`/`ILIKE` metacharacters so a search term matches literally.
///
/// Uses backslash, the PostgreSQL default escape character.
///
/// # Examples
///
/// ```
/// use artfood_core::item::escape_like;
/// assert_eq!(escape_like("50%_off"), "50\\%\\_off");
/// assert_eq!(escape_like("apple"), "apple");
/// ```
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Persistence for items.
///
/// Concurrent updates to the same id are last-writer-wins.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items ordered by id.
    async fn list(&self) -> Result<Vec<Item>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Item>, CoreError>;

    async fn create(&self, item: &NewItem) -> Result<Item, CoreError>;

    /// Returns `None` if no item has the given id.
    async fn update(&self, id: DbId, changes: &ItemChanges) -> Result<Option<Item>, CoreError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;

    /// Case-insensitive substring match on name or description, ordered by id.
    async fn search(&self, term: &str) -> Result<Vec<Item>, CoreError>;
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn create_requires_name() {
        let err = CreateItem::default().validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn create_rejects_blank_name() {
        let input = CreateItem {
            name: Some("   ".into()),
            description: None,
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_defaults_description_to_empty() {
        let input = CreateItem {
            name: Some(" Apple ".into()),
            description: None,
        };
        let item = input.validate().unwrap();
        assert_eq!(item.name, "Apple");
        assert_eq!(item.description, "");
    }

    #[test]
    fn create_rejects_overlong_name() {
        let input = CreateItem {
            name: Some("x".repeat(MAX_ITEM_NAME_LEN + 1)),
            description: None,
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_requires_some_field() {
        assert_matches!(
            UpdateItem::default().validate(),
            Err(CoreError::Validation(msg)) if msg == "No fields to update"
        );
    }

    #[test]
    fn update_keeps_unset_fields_absent() {
        let changes = UpdateItem {
            name: None,
            description: Some("ripe".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.description.as_deref(), Some("ripe"));
    }

    #[test]
    fn update_rejects_blank_name() {
        let input = UpdateItem {
            name: Some(String::new()),
            description: None,
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn escape_like_handles_backslash_and_percent() {
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("%"), r"\%");
        assert_eq!(escape_like(""), "");
    }
}
