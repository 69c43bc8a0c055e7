//! HTTP routes for the permissions service
//!
//! Each domain's noun is served at `/{service}/{noun}`:
//!   GET  ?d=<json body>  - read
//!   PUT  <json body>     - update
//! Responses are always the JSON envelope.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::bridge::{Envelope, DATA_FIELDS};
use crate::catalog::Domain;
use crate::service;
use crate::store::Store;

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: "./data/rightsmap.mdb".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `RIGHTSMAP_DB` and `PORT`, falling back to the defaults
    pub fn from_env() -> Self {
        let d = Self::default();
        ServerConfig {
            db_path: std::env::var("RIGHTSMAP_DB").unwrap_or(d.db_path),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(d.port),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[derive(Debug, Deserialize)]
struct ReadQuery {
    d: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn read(domain: Domain, store: Arc<Store>, q: ReadQuery) -> Json<Envelope<Value>> {
    let body = match q.d.as_deref().map(serde_json::from_str::<Value>) {
        Some(Ok(v)) => v,
        Some(Err(_)) => return Json(Envelope::error(DATA_FIELDS, json!([["d", "invalid"]]))),
        None => Value::Null,
    };
    Json(service::read(&store, domain, &body))
}

async fn update(domain: Domain, store: Arc<Store>, body: Bytes) -> Json<Envelope<Value>> {
    match serde_json::from_slice::<Value>(&body) {
        Ok(v) => Json(service::update(&store, domain, &v)),
        Err(_) => Json(Envelope::error(DATA_FIELDS, json!([["body", "invalid"]]))),
    }
}

pub fn router(store: Arc<Store>) -> Router {
    let mut app: Router<Arc<Store>> = Router::new().route("/health", get(health));
    for domain in Domain::ALL {
        let path = format!("/{}/{}", domain.service(), domain.noun());
        app = app.route(
            &path,
            get(move |State(s): State<Arc<Store>>, Query(q): Query<ReadQuery>| read(domain, s, q))
                .put(move |State(s): State<Arc<Store>>, b: Bytes| update(domain, s, b)),
        );
    }
    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
