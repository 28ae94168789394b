//! Pure aggregation over contribution ledgers.
//!
//! Every function here is total: any input, including the empty list and
//! rows whose amounts were normalized from junk, produces a defined result.
//! Nothing mutates its input, and sums are order-independent.

use serde::Serialize;

use super::contributions_model::Contribution;
use crate::issues::Issue;

/// Funding state of a single issue, as shown on its details page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSummary {
    pub total_collected: f64,
    pub progress_percent: u8,
    pub contribution_count: usize,
}

/// Sum of pledge amounts. Non-finite amounts count as zero, so the result
/// is never NaN.
pub fn total_collected(contributions: &[Contribution]) -> f64 {
    contributions
        .iter()
        .map(|c| if c.amount.is_finite() { c.amount } else { 0.0 })
        .sum()
}

/// Funding completion as an integer percentage, clamped to [0, 100].
///
/// Over-funded issues report 100, never more; a zero target reports 0 so
/// there is no division by zero.
pub fn progress_percent(total_collected: f64, suggested_amount: f64) -> u8 {
    if suggested_amount > 0.0 {
        ((total_collected / suggested_amount) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

/// Total a single contributor has pledged across the given rows.
///
/// The rows are expected to be pre-filtered to one identity (the owned-view
/// resolver produces exactly that); the sum follows the same zero-fallback
/// rule as [`total_collected`].
pub fn total_paid_by_identity(contributions: &[Contribution]) -> f64 {
    total_collected(contributions)
}

/// Funding state for one issue from its contribution rows.
pub fn funding_summary(issue: &Issue, contributions: &[Contribution]) -> FundingSummary {
    let total = total_collected(contributions);
    FundingSummary {
        total_collected: total,
        progress_percent: progress_percent(total, issue.suggested_amount),
        contribution_count: contributions.len(),
    }
}

/// Case-insensitive substring search over a contribution list.
///
/// Matches the issue title, contributor name, contributor email, or
/// address; an empty query selects everything.
pub fn search_contributions(contributions: &[Contribution], query: &str) -> Vec<Contribution> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return contributions.to_vec();
    }
    contributions
        .iter()
        .filter(|c| {
            c.issue_title.to_lowercase().contains(&q)
                || c.contributor_name.to_lowercase().contains(&q)
                || c.contributor_email.to_lowercase().contains(&q)
                || c.address.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}
