//! Boundary validation for incoming requests and events.
//!
//! Deserialization failures and rule violations are kept apart so the HTTP
//! layer can answer them with different status codes.

use chrono::{DateTime, TimeDelta, Utc};
use db::models::{
    cache_reset_event::CacheResetEvent, complaint::ComplaintStatusUpdate,
    queue_request::QueueEnrollmentRequest, review::ReviewSubmission,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use ts_rs::TS;

const DEFAULT_MAX_TEXT_LEN: usize = 4000;
const DEFAULT_MAX_EVENT_CLOCK_SKEW_SECS: u64 = 300;

/// Largest clock skew a config may set (100 years).
pub const MAX_EVENT_CLOCK_SKEW_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Inclusive bounds for a review grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct GradeRange {
    pub min: i32,
    pub max: i32,
}

impl GradeRange {
    pub fn contains(&self, grade: i32) -> bool {
        (self.min..=self.max).contains(&grade)
    }
}

/// Rules applied to requests after they deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct ValidationRules {
    /// `None` accepts any grade.
    pub grade_range: Option<GradeRange>,
    pub max_text_len: usize,
    pub reject_past_start_time: bool,
    pub max_event_clock_skew_secs: u64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            grade_range: None,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            reject_past_start_time: false,
            max_event_clock_skew_secs: DEFAULT_MAX_EVENT_CLOCK_SKEW_SECS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be a positive identifier, got {value}")]
    InvalidIdentifier { field: &'static str, value: i64 },
    #[error("grade {grade} is outside {min}..={max}")]
    GradeOutOfRange { grade: i32, min: i32, max: i32 },
    #[error("{field} exceeds {max} characters")]
    TextTooLong { field: &'static str, max: usize },
    #[error("start_time {start_time} is in the past")]
    StartTimeInPast { start_time: DateTime<Utc> },
    #[error("event occurred_at {occurred_at} is in the future")]
    EventInFuture { occurred_at: DateTime<Utc> },
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Implemented by every type accepted at the boundary.
pub trait Validate {
    fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError>;
}

/// Deserializes `body` as JSON and validates the result.
pub fn parse_request<T>(body: &[u8], rules: &ValidationRules) -> Result<T, RequestError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body)?;
    value.validate(rules)?;
    Ok(value)
}

pub fn ensure_positive_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier { field, value })
    }
}

fn ensure_text_len(
    field: &'static str,
    text: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match text {
        Some(text) if text.chars().count() > max => Err(ValidationError::TextTooLong { field, max }),
        _ => Ok(()),
    }
}

impl Validate for QueueEnrollmentRequest {
    fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError> {
        ensure_positive_id("employee_id", self.employee_id)?;
        ensure_positive_id("customer_id", self.customer_id)?;
        ensure_positive_id("service_id", self.service_id)?;

        if rules.reject_past_start_time && self.start_time < Utc::now() {
            return Err(ValidationError::StartTimeInPast {
                start_time: self.start_time,
            });
        }
        Ok(())
    }
}

impl Validate for ReviewSubmission {
    fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError> {
        ensure_positive_id("queue_id", self.queue_id)?;
        ensure_positive_id("customer_id", self.customer_id)?;

        if let Some(range) = rules.grade_range
            && !range.contains(self.grade)
        {
            return Err(ValidationError::GradeOutOfRange {
                grade: self.grade,
                min: range.min,
                max: range.max,
            });
        }

        ensure_text_len("review_text", self.review_text.as_deref(), rules.max_text_len)
    }
}

impl Validate for ComplaintStatusUpdate {
    fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError> {
        ensure_text_len(
            "response_text",
            self.response_text.as_deref(),
            rules.max_text_len,
        )
    }
}

impl Validate for CacheResetEvent {
    fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError> {
        ensure_positive_id("queue_id", self.queue_id())?;
        ensure_positive_id("customer_id", self.customer_id())?;
        ensure_positive_id("employee_id", self.employee_id())?;

        if let Some(latest) = latest_event_time(Utc::now(), rules.max_event_clock_skew_secs)
            && self.occurred_at() > latest
        {
            return Err(ValidationError::EventInFuture {
                occurred_at: self.occurred_at(),
            });
        }
        Ok(())
    }
}

/// Latest `occurred_at` accepted at `now`. `None` when the skew is too large
/// to represent, which leaves events without an upper bound.
fn latest_event_time(now: DateTime<Utc>, skew_secs: u64) -> Option<DateTime<Utc>> {
    let skew = TimeDelta::try_seconds(i64::try_from(skew_secs).ok()?)?;
    now.checked_add_signed(skew)
}
