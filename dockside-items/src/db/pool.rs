//! Connection handling modes and pool construction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How a request obtains its database handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionMode {
    /// Open a fresh connection per call and close it afterwards
    #[default]
    PerRequest,
    /// Check a connection out of a shared pool and return it afterwards
    Pooled,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerRequest => f.write_str("per-request"),
            Self::Pooled => f.write_str("pooled"),
        }
    }
}

impl FromStr for ConnectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-request" => Ok(Self::PerRequest),
            "pooled" => Ok(Self::Pooled),
            other => Err(format!(
                "unknown connection mode '{}' (expected per-request or pooled)",
                other
            )),
        }
    }
}

/// Create a PostgreSQL connection pool and open its first connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
