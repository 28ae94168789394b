//! Owned-view resolution errors.

use thiserror::Error;

use cleancity_remote::RemoteError;

/// Failure outcome of the tiered owned-view resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Every fallback tier failed; carries the last tier's failure. Partial
    /// results from earlier tiers are never mixed in.
    #[error("all fallback tiers failed for {resource}: {source}")]
    Exhausted {
        resource: &'static str,
        #[source]
        source: RemoteError,
    },

    /// A newer request for the same resource kind started while this one
    /// was in flight; the stale response was discarded unread.
    #[error("superseded by a newer request for {resource}")]
    Superseded { resource: &'static str },
}
