//! CMS content selection.
//!
//! # Data Flow
//! ```text
//! CMS response (Strapi or Sanity JSON)
//!     → item.rs (normalize to one canonical ContentItem shape)
//!     → filter.rs (keep items whose effective locale is current)
//!     → rendering layer
//! ```
//!
//! # Design Decisions
//! - Shape differences are resolved once, at the CMS boundary
//! - Filtering is stable and never re-sorts
//! - Items without a locale tag belong to the default locale

pub mod filter;
pub mod item;

pub use filter::{effective_locale, filter_by_locale};
pub use item::{normalize_collection, normalize_item, ContentError, ContentItem};
