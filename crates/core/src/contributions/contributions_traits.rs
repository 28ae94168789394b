//! Contribution service trait.

use async_trait::async_trait;

use super::contributions_model::{Contribution, NewContribution};
use crate::errors::Result;
use crate::identity::UserIdentity;

/// Contract for ledger reads and appends. There is no update or delete:
/// the ledger is append-only.
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    /// Retrieves all contributions pledged toward one issue.
    async fn get_contributions_for_issue(&self, issue_id: &str) -> Result<Vec<Contribution>>;

    /// Appends a contribution to the ledger on behalf of the identity.
    async fn create_contribution(
        &self,
        identity: &UserIdentity,
        new_contribution: NewContribution,
    ) -> Result<Contribution>;
}
