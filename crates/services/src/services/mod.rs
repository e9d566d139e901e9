pub mod config;
pub mod domain_events;
pub mod queue_cache;
pub mod validation;
