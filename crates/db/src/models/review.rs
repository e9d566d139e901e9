use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::request_metadata::RequestMetadata;

/// Customer feedback on a queue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewSubmission {
    #[serde(flatten)]
    #[ts(flatten)]
    pub metadata: RequestMetadata,
    pub queue_id: i64,
    pub customer_id: i64,
    /// Bounds are enforced at the boundary, see `ValidationRules::grade_range`.
    pub grade: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
}

impl ReviewSubmission {
    pub fn new(queue_id: i64, customer_id: i64, grade: i32, review_text: Option<String>) -> Self {
        Self {
            metadata: RequestMetadata::new(),
            queue_id,
            customer_id,
            grade,
            review_text,
        }
    }
}
