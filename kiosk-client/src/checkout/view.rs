//! View-port seam
//!
//! The session never touches rendering directly; it drives a
//! [`CheckoutView`] with named update operations, so the same state
//! machine works behind any frontend (webview, TUI, tests).

use rust_decimal::Decimal;

/// Where the kiosk navigates when a session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Success page for a completed payment
    PaymentSuccess(String),
    /// Scan entry page (session expired or no invoices left)
    ScanEntry,
}

impl NavigationTarget {
    /// Path of this target on the billing service
    pub fn path(&self) -> String {
        match self {
            Self::PaymentSuccess(payment_id) => {
                format!("/api/v1/payment/success/{}", payment_id)
            }
            Self::ScanEntry => "/api/v1/payment".to_string(),
        }
    }
}

/// Visible affordances of the invoice-selection page
pub trait CheckoutView: Send + Sync {
    /// Update the displayed selection total
    fn set_total(&self, total: Decimal);

    /// Update the countdown display
    fn set_countdown(&self, seconds_left: u32);

    /// Enable or disable the proceed control
    fn set_proceed_enabled(&self, enabled: bool);

    /// Re-show the proceed control after a failed attempt
    fn show_proceed(&self);

    /// Hide the proceed control while the auth panel is active
    fn hide_proceed(&self);

    /// Reveal the staff-identifier input
    fn show_auth_panel(&self);

    /// Update the status message region
    fn set_status(&self, message: &str);

    /// Clear the staff-identifier input
    fn clear_staff_input(&self);

    /// Remove a settled invoice from the selectable list
    fn hide_invoice(&self, invoice_id: &str);

    /// Leave the page
    fn navigate(&self, target: NavigationTarget);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_paths() {
        assert_eq!(
            NavigationTarget::PaymentSuccess("PAY99".to_string()).path(),
            "/api/v1/payment/success/PAY99"
        );
        assert_eq!(NavigationTarget::ScanEntry.path(), "/api/v1/payment");
    }
}
