// Web server — Axum-based JSON API over the analysis core.
//
// POST /process       — entities, key phrases and tags for one text
// POST /relationship  — similarity and shared entities for two texts
// GET  /health        — liveness plus the loaded model's name
//
// The model is built once before the listener binds and shared read-only
// through AppState. CORS is open to any origin, method and header.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::model::LinguisticModel;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn LinguisticModel>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(model: Arc<dyn LinguisticModel>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(AppState { model });

    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Glean listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// The full application router. Public so tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/process", post(handlers::process::process_text))
        .route(
            "/relationship",
            post(handlers::relationship::analyze_relationship),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always 200 once the model is loaded.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok", "model": state.model.name() })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
