//! Identity provider trait.
//!
//! The concrete provider lives outside this crate; the core only reads the
//! current identity and triggers fire-and-forget session operations.

use async_trait::async_trait;

use super::identity_model::UserIdentity;

/// Contract for the external authentication provider.
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    /// The currently authenticated identity, if any.
    fn current_user(&self) -> Option<UserIdentity>;

    /// Starts a login flow. The outcome is observed through a later
    /// `current_user` call, never through this future's result.
    async fn login(&self);

    /// Ends the current session. Fire-and-forget, like `login`.
    async fn logout(&self);
}
