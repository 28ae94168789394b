//! Issue service trait.
//!
//! Defines the contract for issue operations without naming the transport;
//! the concrete service talks to the remote store, test doubles do not.

use async_trait::async_trait;

use super::issues_model::{Issue, IssueUpdate, NewIssue};
use crate::errors::Result;
use crate::identity::UserIdentity;

/// Contract for issue reads, the home feed, and owner-only mutations.
#[async_trait]
pub trait IssueServiceTrait: Send + Sync {
    /// Retrieves the full issue collection.
    async fn get_issues(&self) -> Result<Vec<Issue>>;

    /// Retrieves one issue by id.
    async fn get_issue(&self, issue_id: &str) -> Result<Issue>;

    /// Retrieves the newest issues for the home feed.
    async fn latest_issues(&self, limit: usize) -> Result<Vec<Issue>>;

    /// Submits a new issue owned by the given identity.
    async fn create_issue(&self, identity: &UserIdentity, new_issue: NewIssue) -> Result<Issue>;

    /// Replaces the editable fields of an issue. Owner-only.
    async fn update_issue(
        &self,
        identity: &UserIdentity,
        issue_id: &str,
        update: IssueUpdate,
    ) -> Result<Issue>;

    /// Permanently deletes an issue. Owner-only; there is no undo.
    async fn delete_issue(&self, identity: &UserIdentity, issue_id: &str) -> Result<()>;
}
