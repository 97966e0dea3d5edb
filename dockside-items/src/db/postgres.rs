//! PostgreSQL item store
//!
//! Every call acquires a handle (pooled checkout or a fresh connection),
//! executes a single statement and releases the handle before the result is
//! returned, whether the statement succeeded or not.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgConnection, PgPool, Postgres};

use super::pool::{create_pool, ConnectionMode};
use super::{migrations, ItemStore, StorageError};
use crate::models::{Item, NewItem};

const LIST_SQL: &str = "SELECT id, name FROM items";
const INSERT_SQL: &str = "INSERT INTO items (name) VALUES ($1) RETURNING id, name";

enum Connector {
    Pooled(PgPool),
    PerRequest(PgConnectOptions),
}

/// Storage handle scoped to one call
enum Handle {
    Pooled(PoolConnection<Postgres>),
    Owned(PgConnection),
}

impl Handle {
    fn conn(&mut self) -> &mut PgConnection {
        match self {
            Self::Pooled(conn) => &mut **conn,
            Self::Owned(conn) => conn,
        }
    }

    async fn release(self) {
        match self {
            // Dropping a checkout returns it to the pool
            Self::Pooled(conn) => drop(conn),
            Self::Owned(conn) => {
                if let Err(e) = conn.close().await {
                    tracing::debug!(error = %e, "closing item store connection failed");
                }
            }
        }
    }
}

/// Item store backed by the `items` table
pub struct PgItemStore {
    connector: Connector,
}

impl PgItemStore {
    /// Build a store for `database_url`.
    ///
    /// `Pooled` connects eagerly; `PerRequest` only parses the URL and opens
    /// connections on demand.
    pub async fn connect(
        database_url: &str,
        mode: ConnectionMode,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let connector = match mode {
            ConnectionMode::Pooled => Connector::Pooled(
                create_pool(database_url, max_connections)
                    .await
                    .map_err(StorageError::Connection)?,
            ),
            ConnectionMode::PerRequest => {
                Connector::PerRequest(PgConnectOptions::from_str(database_url)?)
            }
        };
        tracing::debug!(%mode, "item store configured");
        Ok(Self { connector })
    }

    pub fn mode(&self) -> ConnectionMode {
        match self.connector {
            Connector::Pooled(_) => ConnectionMode::Pooled,
            Connector::PerRequest(_) => ConnectionMode::PerRequest,
        }
    }

    /// Anything that fails before a statement runs, including a server-side
    /// rejection during startup (bad password, unknown database), is a
    /// connection failure.
    async fn acquire(&self) -> Result<Handle, StorageError> {
        let handle = match &self.connector {
            Connector::Pooled(pool) => pool.acquire().await.map(Handle::Pooled),
            Connector::PerRequest(options) => options.connect().await.map(Handle::Owned),
        };
        handle.map_err(StorageError::Connection)
    }

    /// Create the `items` table if it is missing.
    pub async fn bootstrap_schema(&self) -> Result<(), StorageError> {
        let mut handle = self.acquire().await?;
        let result = migrations::run(handle.conn()).await;
        handle.release().await;
        result
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, StorageError> {
        let mut handle = self.acquire().await?;
        let result = sqlx::query_as::<_, Item>(LIST_SQL)
            .fetch_all(handle.conn())
            .await;
        handle.release().await;

        let items = result?;
        tracing::debug!(count = items.len(), "listed items");
        Ok(items)
    }

    async fn create(&self, item: NewItem) -> Result<Item, StorageError> {
        let mut handle = self.acquire().await?;
        let result = sqlx::query_as::<_, Item>(INSERT_SQL)
            .bind(item.name())
            .fetch_one(handle.conn())
            .await;
        handle.release().await;

        let created = result?;
        tracing::info!(item_id = created.id, "item created");
        Ok(created)
    }
}
