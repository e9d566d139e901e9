use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::request_metadata::RequestMetadata;

/// A customer's request to join an employee's queue for a service.
///
/// The ids reference employees, customers and services owned elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueueEnrollmentRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub metadata: RequestMetadata,
    pub employee_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub start_time: DateTime<Utc>,
}

impl QueueEnrollmentRequest {
    pub fn new(
        employee_id: i64,
        customer_id: i64,
        service_id: i64,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            metadata: RequestMetadata::new(),
            employee_id,
            customer_id,
            service_id,
            start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_json_round_trip_is_identical() {
        let start_time = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let request = QueueEnrollmentRequest::new(7, 3, 1, start_time);

        let json = serde_json::to_string(&request).unwrap();
        let back: QueueEnrollmentRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(back, request);
        assert_eq!(back.employee_id, 7);
        assert_eq!(back.customer_id, 3);
        assert_eq!(back.service_id, 1);
        assert_eq!(back.start_time, start_time);
    }

    #[test]
    fn test_metadata_is_flattened() {
        let request =
            QueueEnrollmentRequest::new(7, 3, 1, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("metadata").is_none());
        assert!(value.get("request_id").is_some());
        assert!(value.get("issued_at").is_some());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let json = r#"{"employee_id":7,"customer_id":3,"start_time":"2024-01-01T09:00:00Z"}"#;
        let err = serde_json::from_str::<QueueEnrollmentRequest>(json).unwrap_err();
        assert!(err.to_string().contains("service_id"));
    }
}
