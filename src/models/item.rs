use serde::{Deserialize, Serialize};

/// A single record in the bag.
///
/// The on-disk field names (`nome`, `tipo`) are kept so that files written by
/// earlier versions of the tracker still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within a bag. Assigned as `max(existing) + 1` on creation.
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    /// Free-form category (e.g. "weapon", "potion").
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// Input for putting a new item in the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemInput {
    pub name: String,
    pub kind: String,
}

impl CreateItemInput {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
