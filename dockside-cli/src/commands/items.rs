//! `dockside items` - serve the item API

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dockside_items::db::pool::DEFAULT_MAX_CONNECTIONS;
use dockside_items::{run_server, ConnectionMode, ItemsServerConfig, PgItemStore};

use crate::config::ItemsSection;

/// Arguments for the items command
#[derive(Parser, Debug)]
pub struct ItemsArgs {
    /// Address to bind to (default: 0.0.0.0:5000)
    #[arg(long, short = 'b', env = "ITEMS_BIND")]
    pub bind: Option<SocketAddr>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// How requests get a connection: per-request or pooled (default: per-request)
    #[arg(long, env = "ITEMS_CONNECTION_MODE")]
    pub connection_mode: Option<ConnectionMode>,

    /// Pool size when --connection-mode=pooled (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Do not create the items table on start-up
    #[arg(long)]
    pub no_bootstrap: bool,

    /// Only allow localhost front ends (default: any origin)
    #[arg(long)]
    pub cors_localhost: bool,

    /// Serve a front-end directory at /
    #[arg(long, env = "ITEMS_STATIC_DIR", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Settings after merging flags, environment and config file
#[derive(Debug)]
struct Resolved {
    database_url: String,
    mode: ConnectionMode,
    max_connections: u32,
    bootstrap: bool,
    server: ItemsServerConfig,
}

fn resolve(args: ItemsArgs, file: &ItemsSection) -> Result<Resolved> {
    let database_url = args
        .database_url
        .or_else(|| file.database_url.clone())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.dockside/config.toml")?;

    let defaults = ItemsServerConfig::default();
    Ok(Resolved {
        database_url,
        mode: args.connection_mode.or(file.connection_mode).unwrap_or_default(),
        max_connections: args
            .max_connections
            .or(file.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        bootstrap: !args.no_bootstrap && file.bootstrap_schema.unwrap_or(true),
        server: ItemsServerConfig {
            bind_addr: args.bind.or(file.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: !args.cors_localhost && file.cors_permissive.unwrap_or(true),
            static_dir: args.static_dir.or_else(|| file.static_dir.clone()),
        },
    })
}

/// Run the item API server
pub async fn run_items(args: ItemsArgs, file: &ItemsSection) -> Result<()> {
    let resolved = resolve(args, file)?;

    tracing::info!(
        mode = %resolved.mode,
        "Starting item server on {}",
        resolved.server.bind_addr
    );

    let store = PgItemStore::connect(
        &resolved.database_url,
        resolved.mode,
        resolved.max_connections,
    )
    .await
    .context("Failed to set up item store")?;

    if resolved.bootstrap {
        store
            .bootstrap_schema()
            .await
            .context("Failed to create items table")?;
    }

    run_server(Arc::new(store), resolved.server, super::shutdown_signal())
        .await
        .context("Item server error")?;

    Ok(())
}
