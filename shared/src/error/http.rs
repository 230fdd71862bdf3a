//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::EmptySelection
            | Self::InvalidAmount => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::StaffNotRecognized | Self::StaffNotAuthorized => StatusCode::FORBIDDEN,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::InvoiceAlreadyPaid => StatusCode::CONFLICT,

            // 422 Unprocessable Entity
            Self::PaymentFailed => StatusCode::UNPROCESSABLE_ENTITY,

            // 5xx
            Self::NetworkError => StatusCode::BAD_GATEWAY,
            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
