pub mod error;
pub mod layout;
pub mod routes;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use roster::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Configuration for the Roster HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub db_name: String,
    /// Documentation file, resolved against the working directory.
    pub docs_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            db_name: "roster".to_string(),
            docs_path: PathBuf::from("API_DOCUMENTATION.md"),
        }
    }
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(db: Arc<Database>, config: &ServerConfig) -> Router {
    let state = AppState {
        db,
        docs_path: config.docs_path.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::AllowHeaders::mirror_request());

    routes::build_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and block until shutdown.
///
/// The database handle is closed once the server has drained.
pub async fn start_server(db: Arc<Database>, config: ServerConfig) -> std::io::Result<()> {
    let router = build_router(db.clone(), &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Roster server listening on http://{addr}");
    tracing::info!("Database:      {}", config.db_name);
    tracing::info!("Documentation: {}", config.docs_path.display());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = db.close().await {
        tracing::warn!("Error closing database: {e}");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
