//! Kiosk Client - checkout flow and HTTP client for the billing service
//!
//! Provides the checkout session state machine driven by the kiosk page,
//! plus network-based HTTP calls to the billing/payment service API.

pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod search;

pub use checkout::{
    BillingService, CheckoutError, CheckoutSession, CheckoutView, Countdown, NavigationTarget,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::checkout::{
    CheckoutState, PaymentRequest, PaymentResponse, ScanRequest, ScanResponse, StaffAuthRequest,
    StaffAuthResponse,
};
pub use shared::models::{Customer, Invoice};
