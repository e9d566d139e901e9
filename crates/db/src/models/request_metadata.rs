use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Common metadata carried by every client request.
///
/// Request types embed this with `#[serde(flatten)]`, so on the wire the
/// fields sit next to the request's own fields. Clients may omit both; the
/// server fills in a fresh id and the time of receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RequestMetadata {
    #[serde(default = "Uuid::new_v4")]
    pub request_id: Uuid,
    #[serde(default = "Utc::now")]
    pub issued_at: DateTime<Utc>,
}

impl RequestMetadata {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            issued_at: Utc::now(),
        }
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new()
    }
}
