//! Checkout wire types
//!
//! Request/response DTOs exchanged with the billing/payment service and
//! the checkout session state shared with the frontend. The JSON shapes
//! here are fixed by the service API and must not drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Session State
// ============================================================================

/// State of one checkout session
///
/// Exactly one session is live per kiosk page; it moves from `Selecting`
/// through the authorization/payment exchange to a terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    /// Operator is toggling invoices in and out of the selection
    #[default]
    Selecting,
    /// Proceed was confirmed; waiting for a staff card swipe
    AwaitingStaffAuth,
    /// Staff-authorization request in flight
    Authorizing,
    /// Payment-submission request in flight
    Processing,
    /// Payment accepted; navigation to the success page has happened
    Completed,
    /// Authorization or payment was rejected; resets to idle after a delay
    Failed,
    /// Countdown ran out; navigation back to the scan entry has happened
    Expired,
}

impl CheckoutState {
    /// Terminal states tear the session down; no further input is accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Expired)
    }

    /// A network exchange is outstanding; new staff input is ignored
    pub fn is_request_in_flight(&self) -> bool {
        matches!(self, Self::Authorizing | Self::Processing)
    }
}

// ============================================================================
// RFID Scan (kiosk entry page)
// ============================================================================

/// Customer card scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub rfid: String,
}

/// Successful scan response: where to send the kiosk next
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub redirect_url: String,
}

// ============================================================================
// Staff Authorization
// ============================================================================

/// Staff authorization request
///
/// Carries the staff identifier together with the snapshotted invoice
/// selection so the service can validate the attempt as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAuthRequest {
    pub staff_rfid: String,
    pub invoices: Vec<String>,
}

/// Staff authorization response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAuthResponse {
    /// `false` (or a missing field) means the attempt must not proceed
    /// to payment submission
    #[serde(default)]
    pub authorized: bool,
}

// ============================================================================
// Payment Submission
// ============================================================================

/// Payment submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Snapshotted invoice ids being paid
    pub invoices: Vec<String>,
    /// Outstanding amount per invoice id at snapshot time
    pub invoice_amounts: HashMap<String, Decimal>,
    /// Sum of the snapshotted amounts
    pub total_amount: Decimal,
    pub customer_name: String,
    /// The staff identifier that authorized this attempt
    pub staff_rfid: String,
}

/// Payment submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: String,
}
