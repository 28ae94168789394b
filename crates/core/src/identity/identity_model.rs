//! Identity domain model.

use serde::{Deserialize, Serialize};

/// The authenticated user as supplied by the external auth provider.
///
/// The email is the sole ownership key across the application; display name
/// and photo are presentation defaults for submission forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: String,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// True when this identity can own records (a non-empty email).
    pub fn is_authenticated(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
