//! Contribution service backed by the remote collection store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serde_json::json;

use super::contributions_model::{Contribution, NewContribution};
use super::contributions_traits::ContributionServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::identity::UserIdentity;
use crate::utils::{inserted_id, parse_records};
use cleancity_remote::{CollectionQuery, RemoteStoreTrait};

/// Service for reading and appending to the contribution ledger.
pub struct ContributionService {
    store: Arc<dyn RemoteStoreTrait>,
}

impl ContributionService {
    pub fn new(store: Arc<dyn RemoteStoreTrait>) -> Self {
        Self { store }
    }

    /// Fills contributor fields the form left empty from the identity.
    fn with_identity_defaults(
        identity: &UserIdentity,
        mut pledge: NewContribution,
    ) -> NewContribution {
        if pledge.contributor_name.trim().is_empty() {
            pledge.contributor_name = identity.display_name.clone();
        }
        if pledge.contributor_email.trim().is_empty() {
            pledge.contributor_email = identity.email.clone();
        }
        if pledge.avatar.is_none() && !identity.photo_url.is_empty() {
            pledge.avatar = Some(identity.photo_url.clone());
        }
        pledge
    }
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    async fn get_contributions_for_issue(&self, issue_id: &str) -> Result<Vec<Contribution>> {
        let query = CollectionQuery::new().issue_id(issue_id);
        let records = self.store.fetch_collection("/contributions", &query).await?;
        Ok(parse_records(records))
    }

    async fn create_contribution(
        &self,
        identity: &UserIdentity,
        new_contribution: NewContribution,
    ) -> Result<Contribution> {
        if !identity.is_authenticated() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        let pledge = Self::with_identity_defaults(identity, new_contribution);
        pledge.validate()?;

        let payload = json!({
            "issueId": pledge.issue_id,
            "issueTitle": pledge.issue_title,
            "amount": pledge.amount,
            "name": pledge.contributor_name.trim(),
            "email": pledge.contributor_email.trim(),
            "phone": pledge.phone,
            "address": pledge.address,
            "additionalInfo": pledge.additional_info.clone().unwrap_or_default(),
            "avatar": pledge.avatar.clone().unwrap_or_default(),
        });

        let response = self.store.create("/contributions", &payload).await?;
        let id = inserted_id(&response);
        debug!(
            "Recorded contribution '{}' of {} toward issue '{}'",
            id, pledge.amount, pledge.issue_id
        );

        Ok(Contribution {
            id,
            issue_id: pledge.issue_id,
            issue_title: pledge.issue_title,
            amount: pledge.amount,
            contributor_name: pledge.contributor_name.trim().to_string(),
            contributor_email: pledge.contributor_email.trim().to_string(),
            phone: pledge.phone,
            address: pledge.address,
            additional_info: pledge.additional_info,
            avatar: pledge.avatar,
            created_at: Utc::now(),
        })
    }
}
