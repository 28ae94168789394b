//! Issue service backed by the remote collection store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serde_json::json;

use super::issues_errors::IssueError;
use super::issues_model::{Issue, IssueUpdate, NewIssue};
use super::issues_traits::IssueServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::identity::UserIdentity;
use crate::utils::{inserted_id, parse_records};
use cleancity_remote::{CollectionQuery, RemoteStoreTrait};

/// Service for reading and mutating issues.
pub struct IssueService {
    store: Arc<dyn RemoteStoreTrait>,
}

impl IssueService {
    pub fn new(store: Arc<dyn RemoteStoreTrait>) -> Self {
        Self { store }
    }

    fn require_identity(identity: &UserIdentity) -> Result<&str> {
        if identity.is_authenticated() {
            Ok(identity.email.trim())
        } else {
            Err(ValidationError::MissingField("email".to_string()).into())
        }
    }

    async fn fetch_issue(&self, issue_id: &str) -> Result<Issue> {
        let record = self
            .store
            .fetch_record(&format!("/issues/{}", issue_id))
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    Error::Issue(IssueError::NotFound(issue_id.to_string()))
                } else {
                    Error::Remote(err)
                }
            })?;
        serde_json::from_value(record)
            .map_err(|err| IssueError::InvalidData(err.to_string()).into())
    }

    /// Loads the issue and checks that the caller owns it.
    async fn owned_issue(&self, identity: &UserIdentity, issue_id: &str) -> Result<Issue> {
        let email = Self::require_identity(identity)?;
        let issue = self.fetch_issue(issue_id).await?;
        if !issue.owner_email.eq_ignore_ascii_case(email) {
            return Err(IssueError::NotOwned {
                id: issue_id.to_string(),
                email: email.to_string(),
            }
            .into());
        }
        Ok(issue)
    }
}

#[async_trait]
impl IssueServiceTrait for IssueService {
    async fn get_issues(&self) -> Result<Vec<Issue>> {
        let records = self
            .store
            .fetch_collection("/issues", &CollectionQuery::new())
            .await?;
        Ok(parse_records(records))
    }

    async fn get_issue(&self, issue_id: &str) -> Result<Issue> {
        self.fetch_issue(issue_id).await
    }

    async fn latest_issues(&self, limit: usize) -> Result<Vec<Issue>> {
        let records = self
            .store
            .fetch_collection("/issues", &CollectionQuery::new().limit(limit))
            .await?;
        let mut issues: Vec<Issue> = parse_records(records);
        // The backend does not guarantee ordering; newest first regardless.
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        issues.truncate(limit);
        Ok(issues)
    }

    async fn create_issue(&self, identity: &UserIdentity, new_issue: NewIssue) -> Result<Issue> {
        let email = Self::require_identity(identity)?;
        new_issue.validate()?;

        let created_at = Utc::now();
        let image = new_issue
            .image
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        let payload = json!({
            "title": new_issue.title.trim(),
            "category": new_issue.category.as_str(),
            "location": new_issue.location.trim(),
            "description": new_issue.description.trim(),
            "image": image,
            "amount": new_issue.suggested_amount,
            "status": new_issue.status.as_str(),
            "email": email,
            "createdAt": created_at.to_rfc3339(),
        });

        let response = self.store.create("/issues", &payload).await?;
        let id = inserted_id(&response);
        debug!("Created issue '{}' for '{}'", id, email);

        Ok(Issue {
            id,
            title: new_issue.title.trim().to_string(),
            category: new_issue.category,
            location: new_issue.location.trim().to_string(),
            description: new_issue.description.trim().to_string(),
            image: Some(image.to_string()).filter(|i| !i.is_empty()),
            suggested_amount: new_issue.suggested_amount,
            status: new_issue.status,
            owner_email: email.to_string(),
            created_at,
        })
    }

    async fn update_issue(
        &self,
        identity: &UserIdentity,
        issue_id: &str,
        update: IssueUpdate,
    ) -> Result<Issue> {
        update.validate()?;
        let current = self.owned_issue(identity, issue_id).await?;

        // The ownership key is immutable: the payload never carries the email.
        let image = update.image.as_deref().map(str::trim).unwrap_or_default();
        let payload = json!({
            "title": update.title.trim(),
            "category": update.category.as_str(),
            "location": update.location.trim(),
            "description": update.description.trim(),
            "image": image,
            "amount": update.suggested_amount,
            "status": update.status.as_str(),
        });
        self.store
            .update(&format!("/issues/{}", issue_id), &payload)
            .await?;
        debug!("Updated issue '{}'", issue_id);

        Ok(Issue {
            id: current.id,
            title: update.title.trim().to_string(),
            category: update.category,
            location: update.location.trim().to_string(),
            description: update.description.trim().to_string(),
            image: Some(image.to_string()).filter(|i| !i.is_empty()),
            suggested_amount: update.suggested_amount,
            status: update.status,
            owner_email: current.owner_email,
            created_at: current.created_at,
        })
    }

    async fn delete_issue(&self, identity: &UserIdentity, issue_id: &str) -> Result<()> {
        self.owned_issue(identity, issue_id).await?;
        self.store.delete(&format!("/issues/{}", issue_id)).await?;
        debug!("Deleted issue '{}'", issue_id);
        Ok(())
    }
}
