//! Shared types for the front-desk kiosk
//!
//! Common types used across kiosk crates: structured error codes,
//! domain models, and the billing/payment wire DTOs.

pub mod checkout;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, ErrorDetail};
