//! Request middleware applied in front of the upstream forwarder.

pub mod locale;

pub use locale::locale_middleware;
