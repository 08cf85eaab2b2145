//! HTTP endpoints for the asset library
//!
//! Serves the snapshot as the site does: `/api/data` for the catalog,
//! `/api/file` for raw source files under the library root and
//! `/generated/...` for snapshot files and archives, so a download can be
//! pointed at a running server.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::aggregator;
use crate::domain::AppData;
use crate::error::{Result, server_failed};
use crate::snapshot::{ASSETS_DIR, DATA_FILE, STATIC_PATHS_FILE, SnapshotSource};

/// Where `/api/data` gets its catalog from
#[derive(Debug, Clone)]
pub enum DataMode {
    /// Loaded once at startup from the snapshot directory
    Snapshot(Arc<AppData>),
    /// Rescanned from the library root on every request
    Live,
}

/// Shared, read-only server state
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    root: PathBuf,
    snapshot_dir: PathBuf,
    mode: DataMode,
}

impl AppState {
    /// State serving the snapshot in `snapshot_dir`, or an empty catalog when
    /// it cannot be read
    pub fn from_snapshot(root: impl Into<PathBuf>, snapshot_dir: impl Into<PathBuf>) -> Self {
        let snapshot_dir = snapshot_dir.into();
        let data = SnapshotSource::Local(snapshot_dir.clone()).load_app_data_or_default();
        Self::new(root, snapshot_dir, DataMode::Snapshot(Arc::new(data)))
    }

    pub fn new(
        root: impl Into<PathBuf>,
        snapshot_dir: impl Into<PathBuf>,
        mode: DataMode,
    ) -> Self {
        Self {
            inner: Arc::new(StateInner {
                root: root.into(),
                snapshot_dir: snapshot_dir.into(),
                mode,
            }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    pub fn snapshot_dir(&self) -> &Path {
        &self.inner.snapshot_dir
    }

    pub fn mode(&self) -> &DataMode {
        &self.inner.mode
    }
}

/// Error answered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    path: Option<String>,
}

/// Build the router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(api_data))
        .route("/api/file", get(api_file))
        .route("/generated/data.json", get(generated_data))
        .route("/generated/staticPaths.json", get(generated_static_paths))
        .route("/generated/assets/{archive}", get(generated_archive))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| server_failed(format!("cannot bind {addr}: {e}")))?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| server_failed(e.to_string()))?;

    println!("Serving asset library on http://{local_addr}");
    tracing::info!(
        root = %state.root().display(),
        snapshot = %state.snapshot_dir().display(),
        "server listening on {local_addr}"
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| server_failed(e.to_string()))
}

async fn api_data(State(state): State<AppState>) -> std::result::Result<Json<AppData>, ApiError> {
    match state.mode() {
        DataMode::Snapshot(data) => Ok(Json(data.as_ref().clone())),
        DataMode::Live => {
            let root = state.root().to_path_buf();
            let data = tokio::task::spawn_blocking(move || aggregator::app_data(&root))
                .await
                .map_err(|e| {
                    tracing::error!("Library scan failed: {}", e);
                    ApiError::Internal("Error loading asset data".to_string())
                })?;
            Ok(Json(data))
        }
    }
}

/// Relative path that stays inside the directory it is joined to
fn is_contained(path: &str) -> bool {
    let path = Path::new(path);
    !path.is_absolute()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

async fn api_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> std::result::Result<Response, ApiError> {
    let rel = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No file path provided".to_string()))?;
    if !is_contained(&rel) {
        return Err(ApiError::BadRequest("Invalid file path".to_string()));
    }

    let full = state.root().join(&rel);
    if !tokio::fs::try_exists(&full).await.unwrap_or(false) {
        return Err(ApiError::NotFound("File not found".to_string()));
    }

    let content = tokio::fs::read_to_string(&full).await.map_err(|e| {
        tracing::error!("Error reading file {}: {}", rel, e);
        ApiError::Internal("Error reading file".to_string())
    })?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        content,
    )
        .into_response())
}

async fn send_snapshot_file(
    path: PathBuf,
    content_type: &'static str,
) -> std::result::Result<Response, ApiError> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ApiError::NotFound("File not found".to_string()))
        }
        Err(e) => {
            tracing::error!("Error reading {}: {}", path.display(), e);
            Err(ApiError::Internal("Error reading file".to_string()))
        }
    }
}

async fn generated_data(State(state): State<AppState>) -> std::result::Result<Response, ApiError> {
    send_snapshot_file(state.snapshot_dir().join(DATA_FILE), "application/json").await
}

async fn generated_static_paths(
    State(state): State<AppState>,
) -> std::result::Result<Response, ApiError> {
    send_snapshot_file(
        state.snapshot_dir().join(STATIC_PATHS_FILE),
        "application/json",
    )
    .await
}

async fn generated_archive(
    State(state): State<AppState>,
    UrlPath(archive): UrlPath<String>,
) -> std::result::Result<Response, ApiError> {
    if !is_contained(&archive) || archive.contains(['/', '\\']) {
        return Err(ApiError::BadRequest("Invalid archive name".to_string()));
    }
    send_snapshot_file(
        state.snapshot_dir().join(ASSETS_DIR).join(archive),
        "application/zip",
    )
    .await
}
