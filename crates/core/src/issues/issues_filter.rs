//! Client-side search, category filter, and chronological sort for issues.
//!
//! The displayed list is a pure function of the collection and three
//! independent criteria: text predicate, then category predicate, then a
//! stable sort on the filtered subset.

use serde::{Deserialize, Serialize};

use super::issues_model::Issue;

/// Chronological sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// "Latest First"
    #[default]
    Desc,
    /// "Oldest First"
    Asc,
}

/// Display criteria for an issue collection.
///
/// `search` matches title, description, or location; `category` must equal
/// the issue's category. Either criterion left empty selects everything.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortDirection,
}

impl IssueFilter {
    /// Derives the displayed list from the full collection.
    pub fn apply(&self, issues: &[Issue]) -> Vec<Issue> {
        let query = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let mut selected: Vec<Issue> = issues
            .iter()
            .filter(|issue| match &query {
                Some(q) => matches_query(issue, q),
                None => true,
            })
            .filter(|issue| match category {
                Some(c) => issue.category.as_str().eq_ignore_ascii_case(c),
                None => true,
            })
            .cloned()
            .collect();

        // Vec::sort_by is stable: equal timestamps keep their input order.
        match self.sort {
            SortDirection::Desc => selected.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortDirection::Asc => selected.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        selected
    }
}

/// Case-insensitive substring match across the three searchable fields.
fn matches_query(issue: &Issue, query: &str) -> bool {
    issue.title.to_lowercase().contains(query)
        || issue.description.to_lowercase().contains(query)
        || issue.location.to_lowercase().contains(query)
}

/// Distinct categories present in a collection, in first-seen order.
pub fn distinct_categories(issues: &[Issue]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for issue in issues {
        let name = issue.category.as_str().to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
