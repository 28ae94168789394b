//! Tiered resolution of per-user owned views.
//!
//! Tier 1 asks the server to filter by email. Tier 2 fetches broadly and
//! filters client-side. Tier 3 drops every parameter and filters the bare
//! collection. Tiers run strictly one after another; the first success wins
//! and later tiers are never attempted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use super::ownership_errors::ResolveError;
use super::ownership_model::OwnedRecord;
use crate::contributions::Contribution;
use crate::identity::UserIdentity;
use crate::issues::Issue;
use crate::utils::parse_records;
use cleancity_remote::{CollectionQuery, RemoteStoreTrait};

/// Resolves "owned by this identity" subsets of remote collections.
///
/// Holds one monotonically increasing request token per resource kind so a
/// slow earlier response can never overwrite a later one
/// (last-request-wins).
pub struct OwnedViewResolver {
    store: Arc<dyn RemoteStoreTrait>,
    issue_requests: AtomicU64,
    contribution_requests: AtomicU64,
}

impl OwnedViewResolver {
    pub fn new(store: Arc<dyn RemoteStoreTrait>) -> Self {
        Self {
            store,
            issue_requests: AtomicU64::new(0),
            contribution_requests: AtomicU64::new(0),
        }
    }

    /// Issues owned by the identity. Unauthenticated callers own nothing
    /// and trigger no network traffic.
    pub async fn resolve_owned_issues(
        &self,
        identity: Option<&UserIdentity>,
    ) -> Result<Vec<Issue>, ResolveError> {
        self.resolve_owned::<Issue>(&self.issue_requests, identity)
            .await
    }

    /// Contributions authored by the identity.
    pub async fn resolve_owned_contributions(
        &self,
        identity: Option<&UserIdentity>,
    ) -> Result<Vec<Contribution>, ResolveError> {
        self.resolve_owned::<Contribution>(&self.contribution_requests, identity)
            .await
    }

    async fn resolve_owned<T: OwnedRecord>(
        &self,
        requests: &AtomicU64,
        identity: Option<&UserIdentity>,
    ) -> Result<Vec<T>, ResolveError> {
        let user = match identity {
            Some(user) if user.is_authenticated() => user,
            _ => return Ok(Vec::new()),
        };
        let email = user.email.trim();
        let resource = T::resource_path();
        let token = requests.fetch_add(1, Ordering::SeqCst) + 1;

        // Tier 1: trust the server-side filter when it works.
        let tier1 = self
            .store
            .fetch_collection(resource, &CollectionQuery::new().email(email))
            .await;
        Self::ensure_current(requests, token, resource)?;
        let tier1_err = match tier1 {
            Ok(records) => return Ok(parse_records(records)),
            Err(err) => err,
        };
        warn!(
            "Server-side owner filter failed for '{}' ({}); falling back to broad fetch",
            resource, tier1_err
        );

        // Tier 2: broad fetch, filtered client-side.
        let tier2 = self.store.fetch_collection(resource, &T::broad_query()).await;
        Self::ensure_current(requests, token, resource)?;
        let tier2_err = match tier2 {
            Ok(records) => return Ok(Self::filter_owned(parse_records(records), email)),
            Err(err) => err,
        };
        warn!(
            "Broad fetch failed for '{}' ({}); falling back to the bare collection",
            resource, tier2_err
        );

        // Tier 3: last resort, no parameters at all.
        let tier3 = self
            .store
            .fetch_collection(resource, &CollectionQuery::new())
            .await;
        Self::ensure_current(requests, token, resource)?;
        match tier3 {
            Ok(records) => Ok(Self::filter_owned(parse_records(records), email)),
            Err(err) => Err(ResolveError::Exhausted {
                resource,
                source: err,
            }),
        }
    }

    /// Case-insensitive exact match on the owning email; stored casing is
    /// not guaranteed to agree with the authenticated identity's casing.
    fn filter_owned<T: OwnedRecord>(records: Vec<T>, email: &str) -> Vec<T> {
        let wanted = email.to_lowercase();
        records
            .into_iter()
            .filter(|record| record.owner_email().to_lowercase() == wanted)
            .collect()
    }

    fn ensure_current(
        requests: &AtomicU64,
        token: u64,
        resource: &'static str,
    ) -> Result<(), ResolveError> {
        let current = requests.load(Ordering::SeqCst);
        if current != token {
            debug!(
                "Discarding stale response for '{}' (request {} superseded by {})",
                resource, token, current
            );
            return Err(ResolveError::Superseded { resource });
        }
        Ok(())
    }
}
