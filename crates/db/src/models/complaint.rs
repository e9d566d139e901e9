use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use ts_rs::TS;

/// Resolution state of a customer complaint. Kept separate from
/// [`QueueStatus`](super::queue_status::QueueStatus).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[ts(export)]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
    Rejected,
}

/// Body of `PUT /api/complaints/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplaintStatusUpdate {
    pub complaint_status: ComplaintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

impl ComplaintStatusUpdate {
    pub fn new(complaint_status: ComplaintStatus, response_text: Option<String>) -> Self {
        Self {
            complaint_status,
            response_text,
        }
    }

    /// The response text, treating blank text as absent.
    pub fn response_text(&self) -> Option<&str> {
        self.response_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
