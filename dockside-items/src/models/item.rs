//! Item record and the validated create payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A persisted item. `id` is assigned by the database and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

/// Name for an item that is about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
}

impl NewItem {
    /// Accept any present name. Only existence is checked; an empty string
    /// is a valid name.
    ///
    /// # Example
    /// ```
    /// use dockside_items::NewItem;
    ///
    /// assert!(NewItem::new(Some("widget".into())).is_ok());
    /// assert!(NewItem::new(None).is_err());
    /// ```
    pub fn new(name: Option<String>) -> Result<Self, ValidationError> {
        name.map(|name| Self { name })
            .ok_or(ValidationError::Missing { field: "name" })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
