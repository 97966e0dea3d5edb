//! In-process item store

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ItemStore, StorageError};
use crate::models::{Item, NewItem};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Item>,
    last_id: i32,
}

/// Item store kept in memory for the lifetime of the process.
///
/// Ids start at 1 and increase by one per insert, like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    table: Mutex<Table>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StorageError> {
        Ok(self.table.lock().await.rows.clone())
    }

    async fn create(&self, item: NewItem) -> Result<Item, StorageError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let created = Item {
            id: table.last_id,
            name: item.into_name(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }
}
