use std::path::PathBuf;

use axum::{Router, routing::get, routing::post};
use tokio::net::TcpListener;
use tower_http::decompression::RequestDecompressionLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::{
    services::{health, process_file, supported_extensions},
    state::AppState,
};
use crate::config::Config;
use crate::handlers::{ExtensionRegistry, HandlerResolver};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the application router. Shared between `run` and the integration
/// tests so both exercise the same routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/process-file", post(process_file))
        .route("/health", get(health))
        .route("/supported-extensions", get(supported_extensions))
        .with_state(state)
        // Automatically decompress gzip/deflate/brotli request bodies
        .layer(RequestDecompressionLayer::new())
}

pub async fn run(config_path: Option<PathBuf>) -> Result<(), AnyError> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .map_err(|e| format!("Failed to load config: {}", e))?;

    init_tracing(config.server.debug);

    let registry = ExtensionRegistry::from_mappings(&config.mappings);
    let resolver = HandlerResolver::with_builtins();

    // Resolve every configured handler up front; a missing or broken handler
    // aborts startup instead of returning 500s on first use
    resolver
        .resolve_all(registry.handler_ids())
        .map_err(|e| format!("Handler resolution failed: {}", e))?;

    info!(
        extensions = registry.extensions().len(),
        "Extension registry initialized"
    );

    let address = config.server.bind_addr();
    let state = AppState::new(config, registry, resolver);
    let app = router(state);

    let listener = TcpListener::bind(address.as_str()).await?;
    info!(%address, "Parsebox API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "info,parsebox=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
