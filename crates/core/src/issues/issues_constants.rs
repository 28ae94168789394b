/// Issue categories
///
/// The closed set of categories an issue can be filed under. The strings are
/// the exact wire values stored by the backend.
/// Overflowing or uncollected garbage.
pub const CATEGORY_GARBAGE: &str = "Garbage";

/// Construction without a permit or on public land.
pub const CATEGORY_ILLEGAL_CONSTRUCTION: &str = "Illegal Construction";

/// Damaged benches, lights, fences, and other public property.
pub const CATEGORY_BROKEN_PUBLIC_PROPERTY: &str = "Broken Public Property";

/// Potholes and damaged road surfaces.
pub const CATEGORY_ROAD_DAMAGE: &str = "Road Damage";

/// All supported categories, in display order.
pub const ISSUE_CATEGORIES: [&str; 4] = [
    CATEGORY_GARBAGE,
    CATEGORY_ILLEGAL_CONSTRUCTION,
    CATEGORY_BROKEN_PUBLIC_PROPERTY,
    CATEGORY_ROAD_DAMAGE,
];

/// Issue statuses
pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_ENDED: &str = "ended";

/// Page-size hint used by broad fallback fetches of the issue collection.
pub const BROAD_FETCH_LIMIT: usize = 1000;
