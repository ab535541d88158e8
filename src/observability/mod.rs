//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! locale middleware, upstream forwarder:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the trace span
//! - Metrics are cheap and disabled unless configured

pub mod logging;
pub mod metrics;
