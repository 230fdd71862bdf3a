//! Unified error codes for the kiosk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication / staff errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth / Staff ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Staff card was not recognized
    StaffNotRecognized = 1002,
    /// Staff authorization was not confirmed by the service
    StaffNotAuthorized = 1003,
    /// Checkout session has expired
    SessionExpired = 1005,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// No invoices selected for payment
    EmptySelection = 5002,
    /// Payment total is zero or negative
    InvalidAmount = 5003,
    /// Invoice has already been paid
    InvoiceAlreadyPaid = 5004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error reaching the billing service
    NetworkError = 9002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Not authenticated",
            Self::StaffNotRecognized => "Staff card not recognized",
            Self::StaffNotAuthorized => "Staff authorization not confirmed",
            Self::SessionExpired => "Checkout session expired",

            Self::PaymentFailed => "Payment processing failed",
            Self::EmptySelection => "Please select at least one invoice to pay",
            Self::InvalidAmount => "Invalid payment amount",
            Self::InvoiceAlreadyPaid => "Invoice has already been paid",

            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
        }
    }

    /// Get the numeric value of this error code
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.as_u16())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when deserializing an unknown error code value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::StaffNotRecognized,
            1003 => Self::StaffNotAuthorized,
            1005 => Self::SessionExpired,

            5001 => Self::PaymentFailed,
            5002 => Self::EmptySelection,
            5003 => Self::InvalidAmount,
            5004 => Self::InvoiceAlreadyPaid,

            9001 => Self::InternalError,
            9002 => Self::NetworkError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
