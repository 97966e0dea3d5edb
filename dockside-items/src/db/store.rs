//! Item store contract

use async_trait::async_trait;

use crate::models::{Item, NewItem};

/// Backend failure while talking to the item store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Could not obtain a usable connection (refused, TLS, pool exhausted)
    #[error("storage unavailable: {0}")]
    Connection(#[source] sqlx::Error),

    /// Connection was fine but the statement failed (constraint, decode)
    #[error("storage statement failed: {0}")]
    Statement(#[source] sqlx::Error),
}

impl StorageError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for StorageError {
    /// Classify by where the failure happened.
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e),
            _ => Self::Statement(e),
        }
    }
}

/// Access to the `items` table.
///
/// `list` makes no ordering promise; callers must not rely on row order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every stored item.
    async fn list(&self) -> Result<Vec<Item>, StorageError>;

    /// Insert one item and return it with its assigned id.
    async fn create(&self, item: NewItem) -> Result<Item, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_connection_failures() {
        assert!(StorageError::from(sqlx::Error::PoolTimedOut).is_connection());
        assert!(StorageError::from(sqlx::Error::PoolClosed).is_connection());

        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(StorageError::from(sqlx::Error::Io(refused)).is_connection());
    }

    #[test]
    fn classifies_statement_failures() {
        assert!(!StorageError::from(sqlx::Error::RowNotFound).is_connection());
        assert!(!StorageError::from(sqlx::Error::ColumnNotFound("name".into())).is_connection());
    }
}
