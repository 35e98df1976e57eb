//! Development server implementation.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use sorcha_web_static::{BuildConfig, BuildError, BuildReport, SiteBuilder};
use tower_http::services::ServeDir;

use crate::watcher::{FileWatcher, WatchEvent, WatchRoots};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site build settings; the output directory is what gets served
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Build task failed: {0}")]
    TaskError(String),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Development server: build, watch, rebuild, serve.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    ///
    /// Build failures are logged and the server keeps serving the last good
    /// output until the next change.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr_str.clone()))?;

        let build = self.config.build.clone();
        log_build(rebuild(build.clone()).await);

        let (watcher, mut rx) = FileWatcher::new(WatchRoots::from_config(&build))
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        // Spawn file watch handler
        let watch_build = build.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                log_change(&event);
                log_build(rebuild(watch_build.clone()).await);
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = static_router(&build.output_dir);

        tracing::info!("Starting dev server at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        // Start server
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Router serving a built site directory.
pub fn static_router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Run a full site build on the blocking pool.
pub async fn rebuild(config: BuildConfig) -> Result<BuildReport, ServerError> {
    let report = tokio::task::spawn_blocking(move || SiteBuilder::new(config).build())
        .await
        .map_err(|e| ServerError::TaskError(e.to_string()))??;

    Ok(report)
}

fn log_change(event: &WatchEvent) {
    let kind = match event {
        WatchEvent::Template(_) => "Template",
        WatchEvent::Partial(_) => "Partial",
        WatchEvent::Asset(_) => "Asset",
    };
    tracing::info!("{} changed: {}", kind, event.path().display());
}

fn log_build(result: Result<BuildReport, ServerError>) {
    match result {
        Ok(report) => tracing::info!(
            "Built {} pages in {}ms",
            report.pages.len(),
            report.duration_ms
        ),
        Err(e) => tracing::error!("Build failed: {}", e),
    }
}
