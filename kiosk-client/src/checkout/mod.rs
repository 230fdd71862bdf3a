//! Checkout session controller
//!
//! This module owns one checkout attempt per kiosk page and drives it
//! from invoice selection to payment completion:
//!
//! ```text
//! Selecting ──proceed──▶ AwaitingStaffAuth ──staff card──▶ Authorizing
//!                                ▲                              │
//!                                │ (3 s idle restore)           ▼
//!                              Failed ◀──rejection──────── Processing
//!                                                               │
//!                                              success ─────────▶ Completed
//!
//!            any non-terminal state ──countdown hits 0──▶ Expired
//! ```
//!
//! One authorization attempt is in flight at a time: while a request is
//! outstanding the session ignores further staff input, and a response
//! that arrives after expiry or teardown is dropped without touching
//! state. The countdown and the network exchanges interleave on the
//! runtime; the interior lock is never held across an await.

mod error;
mod service;
mod timer;
mod view;

pub use error::CheckoutError;
pub use service::BillingService;
pub use timer::Countdown;
pub use view::{CheckoutView, NavigationTarget};

use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::checkout::{CheckoutState, PaymentRequest, StaffAuthRequest};
use shared::error::ErrorCode;
use shared::models::Invoice;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use uuid::Uuid;

/// Countdown start value in seconds
pub const SESSION_SECONDS: u32 = 30;

/// Minimum staff identifier length that triggers an authorization attempt
pub const STAFF_RFID_MIN_LEN: usize = 8;

/// Seconds a failure message stays up before the idle prompt returns
pub const FAILURE_RESET_SECONDS: u32 = 3;

/// Idle prompt shown while waiting for a staff card swipe
pub const MSG_WAITING_FOR_STAFF: &str = "Waiting for staff card...";

const MSG_VERIFYING: &str = "Verifying staff card...";
const MSG_PROCESSING: &str = "Staff authorized! Processing payment...";

/// Snapshot of the selection taken when an attempt starts
///
/// Later toggles must not affect the in-flight request.
struct AttemptSnapshot {
    invoices: Vec<String>,
    amounts: HashMap<String, Decimal>,
    total: Decimal,
}

/// Mutable session state behind the lock
struct SessionInner {
    state: CheckoutState,
    /// Selectable invoices: id -> outstanding amount. Settled invoices
    /// are removed and never re-offered.
    selectable: BTreeMap<String, Decimal>,
    /// Invoice ids currently checked by the operator
    selected: BTreeSet<String>,
    /// Amount index, rebuilt on every selection change
    amounts: BTreeMap<String, Decimal>,
    time_left: u32,
    /// Ticks remaining until a Failed display restores the idle prompt
    reset_in: Option<u32>,
    /// Set on teardown; a closed session ignores all further input
    closed: bool,
}

impl SessionInner {
    fn rebuild_amounts(&mut self) {
        self.amounts = self
            .selected
            .iter()
            .filter_map(|id| self.selectable.get(id).map(|amt| (id.clone(), *amt)))
            .collect();
    }

    fn total(&self) -> Decimal {
        self.amounts.values().sum()
    }

    /// Proceed guard: non-empty selection with a positive total
    fn proceed_allowed(&self) -> bool {
        !self.selected.is_empty() && self.total() > Decimal::ZERO
    }

    fn accepts_input(&self) -> bool {
        !self.closed && !self.state.is_terminal()
    }
}

/// Checkout session controller
///
/// Exactly one session is live per page instance; it is created when the
/// invoice-selection page loads and torn down on navigation away. All
/// state transitions are reflected through the injected [`CheckoutView`].
pub struct CheckoutSession {
    id: Uuid,
    customer_name: String,
    service: Arc<dyn BillingService>,
    view: Arc<dyn CheckoutView>,
    inner: Mutex<SessionInner>,
}

impl std::fmt::Debug for CheckoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("id", &self.id)
            .field("customer_name", &self.customer_name)
            .field("state", &self.state())
            .finish()
    }
}

impl CheckoutSession {
    /// Create a session for one customer's outstanding invoices
    ///
    /// Invoices with a non-positive outstanding amount are filtered out
    /// of the selectable set and hidden immediately.
    pub fn new(
        customer_name: impl Into<String>,
        invoices: Vec<Invoice>,
        service: Arc<dyn BillingService>,
        view: Arc<dyn CheckoutView>,
    ) -> Arc<Self> {
        let id = Uuid::new_v4();
        let mut selectable = BTreeMap::new();
        for invoice in &invoices {
            if invoice.is_outstanding() {
                selectable.insert(invoice.id.clone(), invoice.outstanding_amount);
            } else {
                view.hide_invoice(&invoice.id);
            }
        }

        let customer_name = customer_name.into();
        tracing::info!(
            session = %id,
            customer = %customer_name,
            selectable = selectable.len(),
            "checkout session started"
        );

        view.set_countdown(SESSION_SECONDS);
        view.set_total(Decimal::ZERO);
        view.set_proceed_enabled(false);

        Arc::new(Self {
            id,
            customer_name,
            service,
            view,
            inner: Mutex::new(SessionInner {
                state: CheckoutState::Selecting,
                selectable,
                selected: BTreeSet::new(),
                amounts: BTreeMap::new(),
                time_left: SESSION_SECONDS,
                reset_in: None,
                closed: false,
            }),
        })
    }

    /// Session id, for log correlation
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current session state
    pub fn state(&self) -> CheckoutState {
        self.inner.lock().state
    }

    /// Current selection total
    pub fn total(&self) -> Decimal {
        self.inner.lock().total()
    }

    /// Currently selected invoice ids
    pub fn selected_invoices(&self) -> Vec<String> {
        self.inner.lock().selected.iter().cloned().collect()
    }

    /// Whether the session has been torn down
    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Toggle one invoice in or out of the selection
    ///
    /// Settled invoices are not selectable; toggling an unknown or
    /// settled id is a no-op. The total and the proceed guard are
    /// recomputed on every change.
    pub fn toggle_invoice(&self, invoice_id: &str) {
        let (total, proceed_allowed) = {
            let mut inner = self.inner.lock();
            if !inner.accepts_input() || !inner.selectable.contains_key(invoice_id) {
                return;
            }
            if !inner.selected.remove(invoice_id) {
                inner.selected.insert(invoice_id.to_string());
            }
            inner.rebuild_amounts();
            (inner.total(), inner.proceed_allowed())
        };

        self.view.set_total(total);
        self.view.set_proceed_enabled(proceed_allowed);
    }

    /// Confirm the selection and reveal the staff-identifier input
    ///
    /// With an empty selection or a non-positive total this is a no-op
    /// that surfaces a validation message; the state does not change.
    pub fn proceed(&self) {
        let outcome = {
            let mut inner = self.inner.lock();
            if !inner.accepts_input() || inner.state != CheckoutState::Selecting {
                return;
            }
            if !inner.proceed_allowed() {
                let code = if inner.selected.is_empty() {
                    ErrorCode::EmptySelection
                } else {
                    ErrorCode::InvalidAmount
                };
                Err(code)
            } else {
                inner.state = CheckoutState::AwaitingStaffAuth;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(session = %self.id, "selection confirmed, awaiting staff auth");
                self.view.hide_proceed();
                self.view.show_auth_panel();
                self.view.set_status(MSG_WAITING_FOR_STAFF);
            }
            Err(code) => {
                self.view.set_status(code.message());
            }
        }
    }

    /// Handle a staff identifier read from the card input
    ///
    /// Identifiers shorter than [`STAFF_RFID_MIN_LEN`] are ignored, as is
    /// any input while an attempt is already in flight. A complete
    /// identifier runs the two-step authorize/pay exchange against the
    /// snapshotted selection and returns the resulting state.
    pub async fn submit_staff_rfid(&self, staff_rfid: &str) -> CheckoutState {
        let snapshot = {
            let mut inner = self.inner.lock();
            if !inner.accepts_input() {
                return inner.state;
            }
            if inner.state.is_request_in_flight() {
                tracing::debug!(session = %self.id, "attempt in flight, ignoring staff input");
                return inner.state;
            }
            if !matches!(
                inner.state,
                CheckoutState::AwaitingStaffAuth | CheckoutState::Failed
            ) || staff_rfid.len() < STAFF_RFID_MIN_LEN
            {
                return inner.state;
            }
            if !inner.proceed_allowed() {
                let code = if inner.selected.is_empty() {
                    ErrorCode::EmptySelection
                } else {
                    ErrorCode::InvalidAmount
                };
                drop(inner);
                return self.fail(CheckoutError::Validation(code.message().to_string()));
            }

            inner.state = CheckoutState::Authorizing;
            inner.reset_in = None;
            AttemptSnapshot {
                invoices: inner.selected.iter().cloned().collect(),
                amounts: inner
                    .amounts
                    .iter()
                    .map(|(id, amt)| (id.clone(), *amt))
                    .collect(),
                total: inner.total(),
            }
        };

        self.view.set_status(MSG_VERIFYING);
        tracing::info!(
            session = %self.id,
            invoices = snapshot.invoices.len(),
            total = %snapshot.total,
            "authorizing staff"
        );

        let auth = self
            .service
            .authorize_staff(StaffAuthRequest {
                staff_rfid: staff_rfid.to_string(),
                invoices: snapshot.invoices.clone(),
            })
            .await;

        match auth {
            Ok(response) if response.authorized => {
                // The countdown may have expired the session while the
                // request was outstanding; a stale response must not
                // touch state.
                if let Err(state) =
                    self.advance_if(CheckoutState::Authorizing, CheckoutState::Processing)
                {
                    tracing::debug!(session = %self.id, "dropping stale authorization response");
                    return state;
                }
                self.view.set_status(MSG_PROCESSING);
            }
            Ok(_) => {
                return self.fail(CheckoutError::Authorization(
                    ErrorCode::StaffNotAuthorized.message().to_string(),
                ));
            }
            Err(err) => {
                return self.fail(CheckoutError::authorization(&err));
            }
        }

        let payment = self
            .service
            .submit_payment(PaymentRequest {
                invoices: snapshot.invoices.clone(),
                invoice_amounts: snapshot.amounts,
                total_amount: snapshot.total,
                customer_name: self.customer_name.clone(),
                staff_rfid: staff_rfid.to_string(),
            })
            .await;

        match payment {
            Ok(response) => {
                {
                    let mut inner = self.inner.lock();
                    if inner.closed || inner.state != CheckoutState::Processing {
                        tracing::debug!(session = %self.id, "dropping stale payment response");
                        return inner.state;
                    }
                    inner.state = CheckoutState::Completed;
                    for id in &snapshot.invoices {
                        inner.selectable.remove(id);
                        inner.selected.remove(id);
                    }
                    inner.rebuild_amounts();
                }
                for id in &snapshot.invoices {
                    self.view.hide_invoice(id);
                }
                tracing::info!(
                    session = %self.id,
                    payment_id = %response.payment_id,
                    total = %snapshot.total,
                    "payment completed"
                );
                self.view
                    .navigate(NavigationTarget::PaymentSuccess(response.payment_id));
                CheckoutState::Completed
            }
            Err(err) => self.fail(CheckoutError::payment(&err)),
        }
    }

    /// One-second countdown tick
    ///
    /// Decrements the remaining time, restores the idle prompt after a
    /// failure, and forces `Expired` exactly once when the countdown
    /// reaches zero. Terminal and closed sessions ignore ticks.
    pub fn tick(&self) -> CheckoutState {
        let mut inner = self.inner.lock();
        if !inner.accepts_input() {
            return inner.state;
        }

        inner.time_left = inner.time_left.saturating_sub(1);
        let time_left = inner.time_left;

        if time_left == 0 {
            inner.state = CheckoutState::Expired;
            drop(inner);
            tracing::info!(session = %self.id, "checkout session expired");
            self.view.set_countdown(0);
            self.view.navigate(NavigationTarget::ScanEntry);
            return CheckoutState::Expired;
        }

        // Failed display rides the same 1 Hz tick back to the idle prompt
        if inner.state == CheckoutState::Failed {
            match inner.reset_in.map(|n| n.saturating_sub(1)) {
                Some(0) => {
                    inner.reset_in = None;
                    inner.state = CheckoutState::AwaitingStaffAuth;
                    drop(inner);
                    self.view.set_countdown(time_left);
                    self.view.set_status(MSG_WAITING_FOR_STAFF);
                    return CheckoutState::AwaitingStaffAuth;
                }
                remaining => inner.reset_in = remaining,
            }
        }

        let state = inner.state;
        drop(inner);
        self.view.set_countdown(time_left);
        state
    }

    /// Tear the session down
    ///
    /// Called on navigation away or page unload. A closed session ignores
    /// toggles, staff input, ticks, and any still-outstanding network
    /// response.
    pub fn teardown(&self) {
        let mut inner = self.inner.lock();
        if !inner.closed {
            inner.closed = true;
            tracing::debug!(session = %self.id, state = ?inner.state, "checkout session torn down");
        }
    }

    /// Atomically advance `from` → `to`
    ///
    /// Fails when the session moved on (expired or torn down) while a
    /// request was outstanding; the caller drops the stale response and
    /// leaves the current state untouched.
    fn advance_if(&self, from: CheckoutState, to: CheckoutState) -> Result<(), CheckoutState> {
        let mut inner = self.inner.lock();
        if inner.closed || inner.state != from {
            return Err(inner.state);
        }
        inner.state = to;
        Ok(())
    }

    /// Record a failed attempt and schedule the idle restore
    ///
    /// The selection survives; only the staff input is cleared so a fresh
    /// card swipe can start a new attempt.
    fn fail(&self, err: CheckoutError) -> CheckoutState {
        {
            let mut inner = self.inner.lock();
            if !inner.accepts_input() {
                return inner.state;
            }
            inner.state = CheckoutState::Failed;
            inner.reset_in = Some(FAILURE_RESET_SECONDS);
        }

        tracing::warn!(session = %self.id, reason = %err, "checkout attempt failed");
        self.view.set_status(&err.to_string());
        self.view.clear_staff_input();
        self.view.show_proceed();
        CheckoutState::Failed
    }
}

#[cfg(test)]
mod tests;
