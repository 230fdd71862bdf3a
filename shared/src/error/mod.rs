//! Unified error system for the kiosk
//!
//! This module provides:
//! - [`ErrorCode`]: standardized error codes shared with the frontend
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`ErrorDetail`]: the `{ "detail": ... }` error body used by the
//!   billing/payment service
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication / staff errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorDetail};
