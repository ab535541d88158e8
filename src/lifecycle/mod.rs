//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Init logging/metrics → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     trigger() → every server in run_until stops accepting → drain → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger (wired by startup.rs)
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accept, drain in-flight requests, exit

pub mod shutdown;
pub mod startup;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
pub use startup::{start, GatewayError};
