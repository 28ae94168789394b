//! Typed query parameters understood by the collection endpoints.

/// Builder for the query string of a collection fetch.
///
/// The backend's filtering capability varies by deployment; these are the
/// parameters the API is known to accept. An empty query asks for the bare
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    params: Vec<(String, String)>,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server-side ownership filter keyed by email.
    pub fn email(mut self, email: &str) -> Self {
        self.params.push(("email".to_string(), email.to_string()));
        self
    }

    /// Page-size hint, used to bound broad fetches.
    pub fn limit(mut self, limit: usize) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    /// Scope a contribution fetch to a single issue.
    pub fn issue_id(mut self, issue_id: &str) -> Self {
        self.params.push(("issueId".to_string(), issue_id.to_string()));
        self
    }

    /// Ask for the whole collection regardless of the server's default scope.
    pub fn all(mut self) -> Self {
        self.params.push(("all".to_string(), "true".to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Key/value pairs in insertion order, ready for the HTTP client.
    pub fn as_params(&self) -> &[(String, String)] {
        &self.params
    }
}
