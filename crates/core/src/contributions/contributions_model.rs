//! Contribution domain models.
//!
//! A contribution is a ledger row: once accepted it is never edited or
//! deleted. `issue_title` is a snapshot taken at pledge time and stays
//! meaningful even if the issue is later renamed or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::ownership::OwnedRecord;
use crate::utils::formats::{amount_format, timestamp_format};
use cleancity_remote::CollectionQuery;

/// Domain model representing a pledge toward an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    #[serde(alias = "_id")]
    pub id: String,
    /// May dangle if the issue was deleted after the pledge; the ledger row
    /// stays valid either way.
    #[serde(default)]
    pub issue_id: String,
    #[serde(default)]
    pub issue_title: String,
    #[serde(with = "amount_format", default)]
    pub amount: f64,
    #[serde(rename = "name", default)]
    pub contributor_name: String,
    #[serde(rename = "email", default)]
    pub contributor_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(alias = "date", with = "timestamp_format", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for Contribution {
    fn resource_path() -> &'static str {
        "/contributions"
    }

    fn broad_query() -> CollectionQuery {
        CollectionQuery::new().all()
    }

    fn owner_email(&self) -> &str {
        &self.contributor_email
    }
}

/// Input model for submitting a contribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub issue_id: String,
    #[serde(default)]
    pub issue_title: String,
    #[serde(with = "amount_format", default)]
    pub amount: f64,
    #[serde(rename = "name", default)]
    pub contributor_name: String,
    #[serde(rename = "email", default)]
    pub contributor_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl NewContribution {
    /// Validates the pledge before it is sent anywhere. Amounts must be
    /// strictly positive; zero or junk never enters the ledger.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(format!(
                "contribution amount must be greater than zero, got {}",
                self.amount
            )));
        }
        if self.issue_id.trim().is_empty() {
            return Err(ValidationError::MissingField("issueId".to_string()));
        }
        if self.contributor_name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.contributor_email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()));
        }
        Ok(())
    }
}
