//! Issues module - domain models, filtering, and services.

mod issues_constants;
mod issues_errors;
mod issues_filter;
mod issues_model;
mod issues_service;
mod issues_traits;

// Re-export the public interface
pub use issues_constants::*;
pub use issues_errors::IssueError;
pub use issues_filter::{distinct_categories, IssueFilter, SortDirection};
pub use issues_model::{Issue, IssueCategory, IssueStatus, IssueUpdate, NewIssue};
pub use issues_service::IssueService;
pub use issues_traits::IssueServiceTrait;
