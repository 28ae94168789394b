//! Ownership module - "my issues" / "my contributions" resolution.
//!
//! The backend's filtering capability is unknown at call time; the resolver
//! degrades through fallback tiers so callers always get a correct owned
//! subset or a single typed failure, never a partial mix.

mod ownership_errors;
mod ownership_model;
mod ownership_resolver;

pub use ownership_errors::ResolveError;
pub use ownership_model::OwnedRecord;
pub use ownership_resolver::OwnedViewResolver;
