use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Key of cached state belonging to one queue/customer/employee combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueueCacheKey {
    pub queue_id: i64,
    pub customer_id: i64,
    pub employee_id: i64,
}

impl std::fmt::Display for QueueCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "queue:{}/customer:{}/employee:{}",
            self.queue_id, self.customer_id, self.employee_id
        )
    }
}

/// Signals that cached state for a queue/customer/employee triple is stale.
///
/// Immutable once built: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CacheResetEvent {
    occurred_at: DateTime<Utc>,
    queue_id: i64,
    customer_id: i64,
    employee_id: i64,
}

impl CacheResetEvent {
    pub fn new(occurred_at: DateTime<Utc>, queue_id: i64, customer_id: i64, employee_id: i64) -> Self {
        Self {
            occurred_at,
            queue_id,
            customer_id,
            employee_id,
        }
    }

    /// Builds an event stamped with the current time.
    pub fn now(queue_id: i64, customer_id: i64, employee_id: i64) -> Self {
        Self::new(Utc::now(), queue_id, customer_id, employee_id)
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn queue_id(&self) -> i64 {
        self.queue_id
    }

    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    pub fn key(&self) -> QueueCacheKey {
        QueueCacheKey {
            queue_id: self.queue_id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
        }
    }
}
