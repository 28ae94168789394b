//! Contract records must meet to participate in owned-view resolution.

use serde::de::DeserializeOwned;

use cleancity_remote::CollectionQuery;

/// A record type whose collection can be narrowed to one owner.
///
/// Implementations supply the collection endpoint, the broad query used by
/// the second fallback tier, and the field that carries the owning email.
pub trait OwnedRecord: DeserializeOwned + Send {
    /// Collection endpoint for this record type.
    fn resource_path() -> &'static str;

    /// Query for the tier-2 broad fetch: a large page-size hint or an
    /// explicit all-records flag, whichever this collection supports.
    fn broad_query() -> CollectionQuery;

    /// Email of the identity that owns or authored this record.
    fn owner_email(&self) -> &str;
}
