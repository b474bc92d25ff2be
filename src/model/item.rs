use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of category labels an item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Home,
    Clothing,
    Sports,
    Books,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Home,
        Category::Clothing,
        Category::Sports,
        Category::Books,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Home => "Home",
            Category::Clothing => "Clothing",
            Category::Sports => "Sports",
            Category::Books => "Books",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single inventory record.
///
/// Serialized with the field names used by the persisted collection
/// (`updatedAt` as an RFC 3339 timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
