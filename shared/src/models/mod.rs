//! Data models
//!
//! Shared between the billing service API and the kiosk frontend.
//! Invoice ids are the service-side document names (strings).

pub mod customer;
pub mod invoice;

// Re-exports
pub use customer::*;
pub use invoice::*;
