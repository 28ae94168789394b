//! CleanCity Remote Store Crate
//!
//! Transport-level access to the CleanCity collection API. This crate knows
//! how to issue single-attempt HTTP requests and normalize their JSON
//! payloads; it carries no domain rules. Fallback strategies, ownership
//! filtering, and funding aggregation live in `cleancity-core`, which
//! consumes this crate through [`RemoteStoreTrait`].
//!
//! # Contract
//!
//! - One network round trip per call: no retries, no caching. Degradation
//!   policy belongs to the caller.
//! - A non-success response becomes [`RemoteError::Status`]; a transport
//!   failure becomes [`RemoteError::Network`]. Nothing is swallowed.
//! - A collection endpoint answering with a well-formed body that is not a
//!   JSON array normalizes to an empty list instead of a decode error.
//!
//! # Core Types
//!
//! - [`RemoteStore`] - reqwest-backed store handle
//! - [`RemoteStoreTrait`] - the seam the domain core and test doubles share
//! - [`CollectionQuery`] - typed query-string builder
//! - [`RemoteError`] - typed failure outcome

pub mod errors;

mod client;
mod query;

pub use client::{RemoteStore, RemoteStoreTrait, DEFAULT_TIMEOUT};
pub use errors::RemoteError;
pub use query::CollectionQuery;
