//! Locale-aware edge gateway library.

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use config::schema::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
pub use locale::{LocaleSettings, RequestContext, SupportedLocale};
pub use routing::{LocaleRouter, RoutingDecision};
