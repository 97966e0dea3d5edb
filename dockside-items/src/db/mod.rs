//! Storage layer - item store trait and its implementations
//!
//! - `PgItemStore`: PostgreSQL, one statement per call, handle released on
//!   every exit path
//! - `MemoryItemStore`: process-local store for tests and demos

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryItemStore;
pub use pool::{create_pool, ConnectionMode};
pub use postgres::PgItemStore;
pub use store::{ItemStore, StorageError};
