//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_routing_decisions_total` (counter): decisions by action, locale
//! - `gateway_requests_total` (counter): forwarded requests by method, status
//! - `gateway_request_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Prometheus exporter runs its own HTTP listener

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

use crate::locale::SupportedLocale;
use crate::routing::RoutingDecision;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one routing decision.
pub fn record_decision(decision: &RoutingDecision, locale: SupportedLocale) {
    counter!(
        "locale_routing_decisions_total",
        "action" => decision.action(),
        "locale" => locale.as_str()
    )
    .increment(1);
}

/// Count one forwarded request and its latency.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}
