//! HTTP backend for WarmBridge.
//!
//! Exposes a reply provider over `POST /api/warmbridge` plus a health
//! probe. Provider failures never surface as transport errors: the
//! handler logs the failure and answers 500 with a fixed reply text that
//! clients can render like any other reply.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::error::Result;
use crate::observability;
use crate::provider::ReplyProvider;
use crate::types::{BridgeReply, BridgeRequest};

/// Reply body sent with every 500.
pub const BACKEND_ERROR_REPLY: &str = "Backend error while calling LLM.";

/// Default address the server binds.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The provider that answers bridge requests.
    pub provider: Arc<dyn ReplyProvider>,
}

impl AppState {
    /// Creates state around the given provider.
    pub fn new(provider: Arc<dyn ReplyProvider>) -> Self {
        Self { provider }
    }
}

/// Builds the WarmBridge router.
///
/// CORS is fully permissive: the original deployment serves a browser
/// page from a different origin than the API.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/warmbridge", post(bridge))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn bridge(
    State(state): State<AppState>,
    Json(request): Json<BridgeRequest>,
) -> (StatusCode, Json<BridgeReply>) {
    observability::SERVER_REQUESTS.click();
    tracing::debug!(history_len = request.history.len(), "bridge request");

    match state
        .provider
        .reply(&request.message, &request.history)
        .await
    {
        Ok(reply) => (StatusCode::OK, Json(BridgeReply::new(reply))),
        Err(err) => {
            observability::SERVER_ERRORS.click();
            tracing::error!(error = %err, "provider call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BridgeReply::new(BACKEND_ERROR_REPLY)),
            )
        }
    }
}

/// Binds `addr` and serves the router until the process exits.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
