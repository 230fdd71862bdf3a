use super::*;
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use shared::checkout::{PaymentResponse, StaffAuthResponse};
use std::collections::VecDeque;
use tokio::sync::Notify;

const STAFF_RFID: &str = "12345678";

// ========================================================================
// Mock billing service
// ========================================================================

/// Scripted billing service recording every request it receives
#[derive(Default)]
struct MockBilling {
    auth_responses: Mutex<VecDeque<ClientResult<StaffAuthResponse>>>,
    payment_responses: Mutex<VecDeque<ClientResult<PaymentResponse>>>,
    auth_calls: Mutex<Vec<StaffAuthRequest>>,
    payment_calls: Mutex<Vec<PaymentRequest>>,
    auth_gate: Mutex<Option<Arc<Notify>>>,
}

impl MockBilling {
    fn authorized(&self) -> &Self {
        self.auth_responses
            .lock()
            .push_back(Ok(StaffAuthResponse { authorized: true }));
        self
    }

    fn not_authorized(&self) -> &Self {
        self.auth_responses
            .lock()
            .push_back(Ok(StaffAuthResponse { authorized: false }));
        self
    }

    fn auth_error(&self, err: ClientError) -> &Self {
        self.auth_responses.lock().push_back(Err(err));
        self
    }

    fn payment_ok(&self, payment_id: &str) -> &Self {
        self.payment_responses.lock().push_back(Ok(PaymentResponse {
            payment_id: payment_id.to_string(),
        }));
        self
    }

    fn payment_error(&self, err: ClientError) -> &Self {
        self.payment_responses.lock().push_back(Err(err));
        self
    }

    /// Hold the next authorization call until the returned notify fires
    fn gate_auth(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.auth_gate.lock() = Some(gate.clone());
        gate
    }

    fn auth_calls(&self) -> Vec<StaffAuthRequest> {
        self.auth_calls.lock().clone()
    }

    fn payment_calls(&self) -> Vec<PaymentRequest> {
        self.payment_calls.lock().clone()
    }
}

#[async_trait]
impl BillingService for MockBilling {
    async fn authorize_staff(&self, request: StaffAuthRequest) -> ClientResult<StaffAuthResponse> {
        self.auth_calls.lock().push(request);
        let gate = self.auth_gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.auth_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Internal("unscripted authorization".to_string())))
    }

    async fn submit_payment(&self, request: PaymentRequest) -> ClientResult<PaymentResponse> {
        self.payment_calls.lock().push(request);
        self.payment_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Internal("unscripted payment".to_string())))
    }
}

// ========================================================================
// Recording view
// ========================================================================

#[derive(Debug, Clone, PartialEq)]
enum ViewEvent {
    Total(Decimal),
    Countdown(u32),
    ProceedEnabled(bool),
    ShowProceed,
    HideProceed,
    ShowAuthPanel,
    Status(String),
    ClearStaffInput,
    HideInvoice(String),
    Navigate(NavigationTarget),
}

#[derive(Default)]
struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    fn statuses(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Status(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn navigations(&self) -> Vec<NavigationTarget> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Navigate(target) => Some(target),
                _ => None,
            })
            .collect()
    }

    fn hidden_invoices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::HideInvoice(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn last_total(&self) -> Option<Decimal> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Total(total) => Some(total),
            _ => None,
        })
    }

    fn proceed_enabled(&self) -> Option<bool> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::ProceedEnabled(enabled) => Some(enabled),
            _ => None,
        })
    }
}

impl CheckoutView for RecordingView {
    fn set_total(&self, total: Decimal) {
        self.events.lock().push(ViewEvent::Total(total));
    }

    fn set_countdown(&self, seconds_left: u32) {
        self.events.lock().push(ViewEvent::Countdown(seconds_left));
    }

    fn set_proceed_enabled(&self, enabled: bool) {
        self.events.lock().push(ViewEvent::ProceedEnabled(enabled));
    }

    fn show_proceed(&self) {
        self.events.lock().push(ViewEvent::ShowProceed);
    }

    fn hide_proceed(&self) {
        self.events.lock().push(ViewEvent::HideProceed);
    }

    fn show_auth_panel(&self) {
        self.events.lock().push(ViewEvent::ShowAuthPanel);
    }

    fn set_status(&self, message: &str) {
        self.events
            .lock()
            .push(ViewEvent::Status(message.to_string()));
    }

    fn clear_staff_input(&self) {
        self.events.lock().push(ViewEvent::ClearStaffInput);
    }

    fn hide_invoice(&self, invoice_id: &str) {
        self.events
            .lock()
            .push(ViewEvent::HideInvoice(invoice_id.to_string()));
    }

    fn navigate(&self, target: NavigationTarget) {
        self.events.lock().push(ViewEvent::Navigate(target));
    }
}

// ========================================================================
// Harness
// ========================================================================

fn invoice(id: &str, cents: i64) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_name: "John Doe".to_string(),
        grand_total: Decimal::new(cents, 2),
        outstanding_amount: Decimal::new(cents, 2),
        due_date: None,
    }
}

fn settled_invoice(id: &str) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_name: "John Doe".to_string(),
        grand_total: Decimal::new(1000, 2),
        outstanding_amount: Decimal::ZERO,
        due_date: None,
    }
}

struct Harness {
    session: Arc<CheckoutSession>,
    billing: Arc<MockBilling>,
    view: Arc<RecordingView>,
}

impl Harness {
    fn new(invoices: Vec<Invoice>) -> Self {
        let billing = Arc::new(MockBilling::default());
        let view = Arc::new(RecordingView::default());
        let session = CheckoutSession::new("John Doe", invoices, billing.clone(), view.clone());
        Self {
            session,
            billing,
            view,
        }
    }

    /// Two unpaid invoices: INV1 at 25.00 and INV2 at 15.00
    fn two_invoices() -> Self {
        Self::new(vec![invoice("INV1", 2500), invoice("INV2", 1500)])
    }

    fn select_and_proceed(&self, ids: &[&str]) {
        for id in ids {
            self.session.toggle_invoice(id);
        }
        self.session.proceed();
        assert_eq!(self.session.state(), CheckoutState::AwaitingStaffAuth);
    }
}

mod test_expiry;
