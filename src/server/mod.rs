//! HTTP boundary: routes, shared state and error mapping.
//!
//! Every aggregate endpoint loads the case table from disk on its own; the
//! only shared state is the pair of configured file paths.

pub mod error;
pub mod handlers;

use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::dataset::{CaseSource, CaseTable};
use crate::error::DataResult;
use error::ApiError;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub boundary_file: PathBuf,
    pub host: String,
    pub port: u16,
}

pub struct AppState {
    pub(crate) cases: CaseSource,
    pub(crate) boundary_path: PathBuf,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &ServerConfig) -> SharedState {
        Arc::new(Self {
            cases: CaseSource::new(&config.data_file),
            boundary_path: config.boundary_file.clone(),
        })
    }

    /// Loads the case table and runs `f` over it on the blocking pool.
    pub async fn query<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&CaseTable) -> DataResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let source = self.cases.clone();

        let result = tokio::task::spawn_blocking(move || {
            let table = source.load()?;
            f(&table)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("query task failed: {e}")))?;

        Ok(result?)
    }
}

pub fn create_router(state: SharedState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(cors::Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/daily_statistics", get(handlers::daily_statistics))
        .route("/api/region_statistics", get(handlers::region_statistics))
        .route("/api/region_daily", get(handlers::region_daily))
        .route("/api/map_data", get(handlers::map_data))
        .route("/api/summary", get(handlers::summary))
        .route("/api/hongkong_map", get(handlers::hongkong_map))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload not string".into());

    error!(panic_message = %message, "handler panicked");
    ApiError::Internal(message).into_response()
}

/// Binds the listener and serves until Ctrl+C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = create_router(AppState::new(&config));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        data_file = %config.data_file.display(),
        boundary_file = %config.boundary_file.display(),
        "Dashboard backend listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
