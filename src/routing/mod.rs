//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RequestContext (path, cookie, Accept-Language)
//!     → locale::resolver (pick one SupportedLocale)
//!     → router.rs (ordered rules)
//!     → matcher.rs (segment, prefix and suffix conditions)
//!     → Return: RoutingDecision
//!
//! Router Compilation (at startup):
//!     LocaleSettings
//!     → Compile locale prefix and exclusion matchers
//!     → Freeze as immutable LocaleRouter
//! ```
//!
//! # Design Decisions
//! - Router compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always yields the same decision
//! - First rule wins (legacy alias, prefixed, default rewrite, redirect)

pub mod decision;
pub mod matcher;
pub mod router;

pub use decision::{RedirectStatus, RoutingDecision};
pub use router::LocaleRouter;
