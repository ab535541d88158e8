//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Logging comes up before anything else can fail noisily
//! - Listener binds last (traffic only when ready)

use std::path::Path;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError, GatewayConfig};
use crate::http::GatewayServer;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};

/// Fatal errors while starting or running the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load the config (or defaults), then run the gateway until a signal arrives.
pub async fn start(config_path: Option<&Path>) -> Result<(), GatewayError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "locale-gateway starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| GatewayError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    GatewayServer::new(config)
        .run_until(listener, &shutdown)
        .await
        .map_err(GatewayError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
