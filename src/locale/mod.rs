//! Locale negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Cookie, Accept-Language)
//!     → context.rs (RequestContext, read-only per request)
//!     → resolver.rs (cookie → header → default)
//!     → Return: exactly one SupportedLocale
//! ```
//!
//! # Design Decisions
//! - Closed locale set, fixed at build time
//! - Settings passed explicitly, no process-wide tables
//! - Resolution is total: unknown input falls back to the default locale

pub mod context;
pub mod resolver;
pub mod settings;
pub mod types;

pub use context::RequestContext;
pub use resolver::resolve_locale;
pub use settings::LocaleSettings;
pub use types::SupportedLocale;
