//! Checkout session errors

use shared::error::ErrorCode;
use thiserror::Error;

/// Failure reasons for one checkout attempt
///
/// Every variant carries the operator-facing message; service-provided
/// messages are passed through verbatim, transport failures fall back to
/// the fixed message of their error code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Selection guard failed (empty selection or non-positive total)
    #[error("{0}")]
    Validation(String),

    /// Staff authorization was rejected or did not confirm
    #[error("{0}")]
    Authorization(String),

    /// Payment submission was rejected after a successful authorization
    #[error("{0}")]
    Payment(String),

    /// The countdown forced the session to expire
    #[error("Checkout session expired")]
    Expired,
}

impl CheckoutError {
    /// Authorization failure from a client error, preferring the
    /// service's own message
    pub fn authorization(err: &crate::ClientError) -> Self {
        Self::Authorization(
            err.service_detail()
                .unwrap_or(ErrorCode::StaffNotRecognized.message())
                .to_string(),
        )
    }

    /// Payment failure from a client error, preferring the service's
    /// own message
    pub fn payment(err: &crate::ClientError) -> Self {
        Self::Payment(
            err.service_detail()
                .unwrap_or(ErrorCode::PaymentFailed.message())
                .to_string(),
        )
    }
}
