//! HTTP access to an extracted design system.
//!
//! `GET /api/design-system` returns the whole descriptor; `?section=tokens`
//! returns only the token catalog and `?section=components` only the component
//! list. The descriptor file is re-read on every request so a fresh extraction
//! is picked up without a restart.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokensmith_common::{Result, TokensmithError};
use tokensmith_core::DesignSystem;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct DesignSystemState {
    path: Arc<PathBuf>,
}

impl DesignSystemState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    async fn load(&self) -> Result<DesignSystem> {
        let content = tokio::fs::read_to_string(self.path.as_ref()).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Which part of the descriptor to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Full,
    Tokens,
    Components,
}

impl Section {
    /// Unknown or absent selectors mean the full descriptor
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("tokens") => Section::Tokens,
            Some("components") => Section::Components,
            _ => Section::Full,
        }
    }

    fn select(self, system: DesignSystem) -> serde_json::Result<serde_json::Value> {
        match self {
            Section::Full => serde_json::to_value(system),
            Section::Tokens => serde_json::to_value(system.tokens),
            Section::Components => serde_json::to_value(system.components),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(err: TokensmithError) -> ApiError {
    error!("Failed to load design system: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to load design system".to_string(),
            details: err.to_string(),
        }),
    )
}

/// GET /api/design-system
async fn get_design_system(
    State(state): State<DesignSystemState>,
    Query(query): Query<SectionQuery>,
) -> std::result::Result<Json<serde_json::Value>, ApiError> {
    let section = Section::from_param(query.section.as_deref());
    let system = state.load().await.map_err(internal_error)?;
    let body = section
        .select(system)
        .map_err(|e| internal_error(e.into()))?;
    Ok(Json(body))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn create_router(state: DesignSystemState) -> Router {
    Router::new()
        .route("/api/design-system", get(get_design_system))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve the descriptor at `path` until the process is stopped
pub async fn serve(addr: SocketAddr, path: PathBuf) -> Result<()> {
    let app = create_router(DesignSystemState::new(path.clone()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    info!("Serving {:?} on http://{}/api/design-system", path, addr);
    axum::serve(listener, app).await?;
    Ok(())
}
