pub mod cache_reset_event;
pub mod complaint;
pub mod queue_request;
pub mod queue_status;
pub mod request_metadata;
pub mod review;
