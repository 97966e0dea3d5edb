//! dockside-items: item management API
//!
//! Lists and creates rows of a single `items(id, name)` table over JSON/HTTP.
//! Each request acquires a storage handle, runs one statement and releases
//! the handle again; there is no other shared state.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ConnectionMode, ItemStore, MemoryItemStore, PgItemStore, StorageError};
pub use http::{build_router, run_server, ApiError, ItemsServerConfig};
pub use models::{Item, NewItem, ValidationError};
