//! Billing service seam

use crate::ClientResult;
use async_trait::async_trait;
use shared::checkout::{PaymentRequest, PaymentResponse, StaffAuthRequest, StaffAuthResponse};

/// Remote billing/payment collaborator used by the checkout session
///
/// Implemented over HTTP by [`crate::HttpClient`]; tests inject scripted
/// implementations.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Verify a staff identifier against the selected invoices
    async fn authorize_staff(&self, request: StaffAuthRequest) -> ClientResult<StaffAuthResponse>;

    /// Submit an authorized payment
    async fn submit_payment(&self, request: PaymentRequest) -> ClientResult<PaymentResponse>;
}
