use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use ts_rs::TS;

/// Lifecycle state of a queue entry.
///
/// The set is closed. Which transitions are allowed between states is decided
/// by whoever owns the queue lifecycle, not by this type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TS,
    EnumString,
    EnumIter,
    Display,
    Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[ts(export)]
pub enum QueueStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    CancelledByCustomer,
    CancelledByEmployee,
    CanceledByAdmin,
    DidNotCome,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown queue status code: {0}")]
pub struct UnknownQueueStatusCode(pub i32);

impl QueueStatus {
    /// Stable integer code, equal to the declaration index.
    pub fn code(self) -> i32 {
        match self {
            QueueStatus::Pending => 0,
            QueueStatus::Confirmed => 1,
            QueueStatus::Completed => 2,
            QueueStatus::CancelledByCustomer => 3,
            QueueStatus::CancelledByEmployee => 4,
            QueueStatus::CanceledByAdmin => 5,
            QueueStatus::DidNotCome => 6,
        }
    }
}

impl From<QueueStatus> for i32 {
    fn from(status: QueueStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i32> for QueueStatus {
    type Error = UnknownQueueStatusCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(QueueStatus::Pending),
            1 => Ok(QueueStatus::Confirmed),
            2 => Ok(QueueStatus::Completed),
            3 => Ok(QueueStatus::CancelledByCustomer),
            4 => Ok(QueueStatus::CancelledByEmployee),
            5 => Ok(QueueStatus::CanceledByAdmin),
            6 => Ok(QueueStatus::DidNotCome),
            other => Err(UnknownQueueStatusCode(other)),
        }
    }
}
