//! CleanCity Core Crate
//!
//! Domain core for the CleanCity civic issue tracker: entity models for
//! issues and the append-only contribution ledger, funding aggregation, the
//! client-side search/sort/filter pipeline, and the ownership-filtered view
//! resolver that degrades gracefully when the backend cannot filter
//! server-side.
//!
//! All I/O goes through the `cleancity-remote` crate; everything else in
//! here is pure computation over fetched collections, safe to call
//! repeatedly with no ordering constraints.

pub mod contributions;
pub mod errors;
pub mod identity;
pub mod issues;
pub mod ownership;

mod utils;

pub use errors::{Error, Result, ValidationError};

pub use contributions::{Contribution, ContributionService, NewContribution};
pub use issues::{Issue, IssueFilter, IssueService, NewIssue};
pub use ownership::OwnedViewResolver;
