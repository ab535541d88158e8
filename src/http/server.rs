//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the locale middleware and forwarder
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Forward routed requests to the upstream origin

use axum::{
    body::Body,
    extract::State,
    http::{Request, Uri, Version},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::middleware::locale_middleware;
use crate::http::request::{request_id, request_id_header, UuidRequestId};
use crate::http::response;
use crate::lifecycle::Shutdown;
use crate::locale::LocaleSettings;
use crate::observability::metrics;
use crate::routing::LocaleRouter;

/// Application state injected into the forwarder.
#[derive(Clone)]
pub struct AppState {
    pub client: Client<HttpConnector, Body>,
    /// Origin authority, e.g. `127.0.0.1:3000`.
    pub upstream: Arc<str>,
}

/// HTTP server for the locale gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the default locale settings.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_settings(config, LocaleSettings::default())
    }

    /// Create a new server with explicit locale settings.
    pub fn with_settings(config: GatewayConfig, settings: LocaleSettings) -> Self {
        let locale_router = Arc::new(LocaleRouter::new(Arc::new(settings)));

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            client,
            upstream: Arc::from(config.upstream.address.as_str()),
        };

        let router = Self::build_router(&config, locale_router, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, locale_router: Arc<LocaleRouter>, state: AppState) -> Router {
        let id_header = request_id_header();

        Router::new()
            .fallback(forward_handler)
            .with_state(state)
            .layer(middleware::from_fn_with_state(locale_router, locale_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(id_header.clone(), UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %req.method(),
                            uri = %req.uri(),
                            request_id = %request_id(req.headers()),
                        )
                    }))
                    .layer(PropagateRequestIdLayer::new(id_header)),
            )
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run_until(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.address,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.triggered())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forward the (possibly rewritten) request to the origin.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().to_string();

    let (mut parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let uri = match format!("http://{}{}", state.upstream, path_and_query).parse::<Uri>() {
        Ok(uri) => uri,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Cannot build upstream URI");
            metrics::record_request(&method, 400, start_time);
            return response::bad_request();
        }
    };

    tracing::debug!(request_id = %request_id, method = %method, uri = %uri, "Forwarding request");

    parts.uri = uri;
    parts.version = Version::HTTP_11;
    let req = Request::from_parts(parts, body);

    match state.client.request(req).await {
        Ok(res) => {
            metrics::record_request(&method, res.status().as_u16(), start_time);
            let (parts, body) = res.into_parts();
            Response::from_parts(parts, Body::new(body)).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_request(&method, 502, start_time);
            response::bad_gateway()
        }
    }
}
