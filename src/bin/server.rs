//! rightsmap REST API server
//!
//! Run with: cargo run --features server --bin rightsmap-server
//!
//! Endpoints:
//!   GET  /health                      - Status and version
//!   GET  /csr/agent/permissions       - Read an agent's rights
//!   PUT  /csr/agent/permissions       - Update an agent's rights
//!   GET  /providers/provider/permissions
//!   PUT  /providers/provider/permissions
//!   GET  /auth/permissions
//!   PUT  /auth/permissions

use std::sync::Arc;

use rightsmap::server::{router, ServerConfig};
use rightsmap::Store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(db = %config.db_path, "opening store");
    let store = Store::open(&config.db_path).expect("Failed to open store");

    let app = router(Arc::new(store));
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");
    tracing::info!(%addr, "rightsmap server running");
    axum::serve(listener, app).await.expect("Server error");
}
