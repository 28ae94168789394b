//! Issue domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::ownership::OwnedRecord;
use crate::utils::formats::{amount_format, timestamp_format};
use cleancity_remote::CollectionQuery;

use super::issues_constants::*;

/// Domain model representing a reported civic issue.
///
/// `owner_email` is set once at submission and never changes; it is the only
/// ownership key in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: IssueCategory,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Suggested funding target, in whole currency units.
    #[serde(rename = "amount", with = "amount_format", default)]
    pub suggested_amount: f64,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(rename = "email")]
    pub owner_email: String,
    #[serde(with = "timestamp_format", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for Issue {
    fn resource_path() -> &'static str {
        "/issues"
    }

    fn broad_query() -> CollectionQuery {
        CollectionQuery::new().limit(BROAD_FETCH_LIMIT)
    }

    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

/// Closed set of issue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IssueCategory {
    #[default]
    Garbage,
    #[serde(rename = "Illegal Construction")]
    IllegalConstruction,
    #[serde(rename = "Broken Public Property")]
    BrokenPublicProperty,
    #[serde(rename = "Road Damage")]
    RoadDamage,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Garbage => CATEGORY_GARBAGE,
            IssueCategory::IllegalConstruction => CATEGORY_ILLEGAL_CONSTRUCTION,
            IssueCategory::BrokenPublicProperty => CATEGORY_BROKEN_PUBLIC_PROPERTY,
            IssueCategory::RoadDamage => CATEGORY_ROAD_DAMAGE,
        }
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            s if s.eq_ignore_ascii_case(CATEGORY_GARBAGE) => Ok(IssueCategory::Garbage),
            s if s.eq_ignore_ascii_case(CATEGORY_ILLEGAL_CONSTRUCTION) => {
                Ok(IssueCategory::IllegalConstruction)
            }
            s if s.eq_ignore_ascii_case(CATEGORY_BROKEN_PUBLIC_PROPERTY) => {
                Ok(IssueCategory::BrokenPublicProperty)
            }
            s if s.eq_ignore_ascii_case(CATEGORY_ROAD_DAMAGE) => Ok(IssueCategory::RoadDamage),
            _ => Err(format!("Unknown issue category: {}", s)),
        }
    }
}

/// Lifecycle status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    #[default]
    Ongoing,
    Ended,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Ongoing => STATUS_ONGOING,
            IssueStatus::Ended => STATUS_ENDED,
        }
    }
}

/// Input model for submitting a new issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    pub category: IssueCategory,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "amount", with = "amount_format", default)]
    pub suggested_amount: f64,
    #[serde(default)]
    pub status: IssueStatus,
}

impl NewIssue {
    /// Validates the submission before it is sent anywhere.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_issue_fields(
            &self.title,
            &self.location,
            &self.description,
            self.suggested_amount,
        )
    }
}

/// Input model for replacing an issue's editable fields.
///
/// The owner email is deliberately absent: ownership is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    pub title: String,
    pub category: IssueCategory,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "amount", with = "amount_format", default)]
    pub suggested_amount: f64,
    #[serde(default)]
    pub status: IssueStatus,
}

impl IssueUpdate {
    /// Validates the replacement fields before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_issue_fields(
            &self.title,
            &self.location,
            &self.description,
            self.suggested_amount,
        )
    }
}

fn validate_issue_fields(
    title: &str,
    location: &str,
    description: &str,
    suggested_amount: f64,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()));
    }
    if location.trim().is_empty() {
        return Err(ValidationError::MissingField("location".to_string()));
    }
    if description.trim().is_empty() {
        return Err(ValidationError::MissingField("description".to_string()));
    }
    if !suggested_amount.is_finite() || suggested_amount < 0.0 {
        return Err(ValidationError::InvalidAmount(format!(
            "suggested amount must be a non-negative number, got {}",
            suggested_amount
        )));
    }
    Ok(())
}
