//! Liveness endpoint
//!
//! Answers without touching the database, so a reachable process with an
//! unreachable backend still reports `ok` here while `/api/items` returns 503.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        service: "items",
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(liveness))
}
