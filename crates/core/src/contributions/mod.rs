//! Contributions module - the append-only pledge ledger.

mod contributions_aggregator;
mod contributions_model;
mod contributions_service;
mod contributions_traits;

// Re-export the public interface
pub use contributions_aggregator::{
    funding_summary, progress_percent, search_contributions, total_collected,
    total_paid_by_identity, FundingSummary,
};
pub use contributions_model::{Contribution, NewContribution};
pub use contributions_service::ContributionService;
pub use contributions_traits::ContributionServiceTrait;
