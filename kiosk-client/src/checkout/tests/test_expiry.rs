use super::*;
use std::time::Duration;

fn run_out_countdown(h: &Harness) {
    for _ in 0..SESSION_SECONDS {
        h.session.tick();
    }
}

#[test]
fn test_expiry_from_selecting_navigates_to_scan_entry() {
    let h = Harness::two_invoices();

    run_out_countdown(&h);

    assert_eq!(h.session.state(), CheckoutState::Expired);
    assert_eq!(h.view.navigations(), vec![NavigationTarget::ScanEntry]);
    assert!(h.billing.auth_calls().is_empty());
    assert!(h.billing.payment_calls().is_empty());
}

#[test]
fn test_expiry_from_awaiting_staff_auth() {
    let h = Harness::two_invoices();
    h.select_and_proceed(&["INV1"]);

    run_out_countdown(&h);

    assert_eq!(h.session.state(), CheckoutState::Expired);
    assert_eq!(h.view.navigations(), vec![NavigationTarget::ScanEntry]);
}

#[test]
fn test_ticks_after_expiry_are_ignored() {
    let h = Harness::two_invoices();

    run_out_countdown(&h);
    h.session.tick();
    h.session.tick();

    // Expired fired exactly once
    assert_eq!(h.view.navigations(), vec![NavigationTarget::ScanEntry]);
}

#[test]
fn test_countdown_is_reported_to_view() {
    let h = Harness::two_invoices();

    h.session.tick();
    h.session.tick();

    let countdowns: Vec<u32> = h
        .view
        .events()
        .into_iter()
        .filter_map(|e| match e {
            ViewEvent::Countdown(s) => Some(s),
            _ => None,
        })
        .collect();
    // Initial display plus two ticks
    assert_eq!(countdowns, vec![SESSION_SECONDS, 29, 28]);
}

#[tokio::test]
async fn test_expiry_during_authorization_drops_the_response() {
    let h = Harness::two_invoices();
    let gate = h.billing.gate_auth();
    h.billing.authorized().payment_ok("PAY1");
    h.select_and_proceed(&["INV1"]);

    let session = h.session.clone();
    let attempt = tokio::spawn(async move { session.submit_staff_rfid(STAFF_RFID).await });
    tokio::task::yield_now().await;
    assert_eq!(h.session.state(), CheckoutState::Authorizing);

    // Countdown runs out while the authorization is outstanding
    run_out_countdown(&h);
    assert_eq!(h.session.state(), CheckoutState::Expired);

    // The response arrives late and must not resurrect the session
    gate.notify_one();
    assert_eq!(attempt.await.unwrap(), CheckoutState::Expired);
    assert!(h.billing.payment_calls().is_empty());
    assert_eq!(h.view.navigations(), vec![NavigationTarget::ScanEntry]);
}

#[test]
fn test_teardown_ignores_all_further_input() {
    let h = Harness::two_invoices();
    h.session.toggle_invoice("INV1");

    h.session.teardown();
    assert!(h.session.is_closed());

    let events_before = h.view.events().len();
    h.session.toggle_invoice("INV2");
    h.session.tick();
    h.session.proceed();

    assert_eq!(h.view.events().len(), events_before);
    assert_eq!(h.session.state(), CheckoutState::Selecting);
}

#[tokio::test]
async fn test_teardown_ignores_staff_input() {
    let h = Harness::two_invoices();
    h.select_and_proceed(&["INV1"]);
    h.session.teardown();

    let state = h.session.submit_staff_rfid(STAFF_RFID).await;

    assert_eq!(state, CheckoutState::AwaitingStaffAuth);
    assert!(h.billing.auth_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_countdown_task_expires_the_session() {
    let h = Harness::two_invoices();
    let countdown = Countdown::start(h.session.clone());

    tokio::time::sleep(Duration::from_secs(u64::from(SESSION_SECONDS) + 1)).await;

    assert_eq!(h.session.state(), CheckoutState::Expired);
    assert_eq!(h.view.navigations(), vec![NavigationTarget::ScanEntry]);
    // The task unregisters itself on the terminal transition
    countdown.stopped().await;
}

#[tokio::test(start_paused = true)]
async fn test_stopped_countdown_never_expires_the_session() {
    let h = Harness::two_invoices();
    let countdown = Countdown::start(h.session.clone());

    tokio::time::sleep(Duration::from_secs(5)).await;
    countdown.stopped().await;
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(h.session.state(), CheckoutState::Selecting);
}
