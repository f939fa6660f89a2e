// src/model.rs
use bson::DateTime;
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "sample_items";

/// One seeded record. The storage layer assigns `_id` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleItem {
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

impl SampleItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: DateTime::from_chrono(Utc::now()),
        }
    }
}

/// The fixed batch the seed tool submits, in insertion order.
pub fn sample_batch() -> Vec<SampleItem> {
    ["Sample A", "Sample B", "Sample C"]
        .into_iter()
        .map(SampleItem::new)
        .collect()
}
