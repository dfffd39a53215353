use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::Config, handlers, metrics, signals::setup_signal_handlers};

/// Request bodies are four numbers and an enum tag
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the charging cost server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests until a shutdown signal arrives
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let (shutdown_tx, signal_handle) = setup_signal_handlers();
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(&config, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting EV charging cost service on {}", addr);
    info!(
        metrics_enabled = config.metrics.enabled,
        metrics_endpoint = %config.metrics.endpoint,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// The metrics route is mounted only when a handle is supplied.
pub fn create_router(config: &Config, metrics_handle: Option<Arc<PrometheusHandle>>) -> Router {
    let mut app = Router::new()
        .route("/calculate", post(handlers::calculate::handle_calculate))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(
                &config.metrics.endpoint,
                get(handlers::metrics_handler::metrics),
            )
            .with_state(handle);
        app = app.merge(metrics_routes);
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
