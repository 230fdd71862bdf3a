//! Interactive checkout flow against a running billing service
//!
//! Fetches a customer's outstanding invoices, selects them all, and then
//! reads staff card swipes from stdin until the payment completes or the
//! session expires.
//!
//! Usage: cargo run --example checkout_demo -- http://localhost:8000 "John Doe"

use kiosk_client::checkout::{CheckoutSession, CheckoutView, Countdown, NavigationTarget};
use kiosk_client::ClientConfig;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

/// Prints every view update to the terminal
struct ConsoleView;

impl CheckoutView for ConsoleView {
    fn set_total(&self, total: Decimal) {
        println!("[view] total: {}", total);
    }

    fn set_countdown(&self, seconds_left: u32) {
        if seconds_left % 10 == 0 {
            println!("[view] {}s left", seconds_left);
        }
    }

    fn set_proceed_enabled(&self, enabled: bool) {
        println!("[view] proceed enabled: {}", enabled);
    }

    fn show_proceed(&self) {
        println!("[view] proceed control shown");
    }

    fn hide_proceed(&self) {
        println!("[view] proceed control hidden");
    }

    fn show_auth_panel(&self) {
        println!("[view] staff card panel shown");
    }

    fn set_status(&self, message: &str) {
        println!("[view] status: {}", message);
    }

    fn clear_staff_input(&self) {
        println!("[view] staff input cleared");
    }

    fn hide_invoice(&self, invoice_id: &str) {
        println!("[view] invoice {} settled", invoice_id);
    }

    fn navigate(&self, target: NavigationTarget) {
        println!("[view] navigate -> {}", target.path());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8000".to_string());
    let customer = args.next().unwrap_or_else(|| "John Doe".to_string());

    let client = ClientConfig::new(&base_url).build_http_client();
    let invoices = client.customer_invoices(&customer).await?;
    println!("{} outstanding invoice(s) for {}", invoices.len(), customer);

    let invoice_ids: Vec<String> = invoices.iter().map(|i| i.id.clone()).collect();
    let session = CheckoutSession::new(
        customer,
        invoices,
        Arc::new(client),
        Arc::new(ConsoleView),
    );
    let countdown = Countdown::start(session.clone());

    for id in &invoice_ids {
        session.toggle_invoice(id);
    }
    session.proceed();

    println!("swipe staff card (type id + enter):");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while !session.state().is_terminal() {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        session.submit_staff_rfid(line.trim()).await;
    }

    session.teardown();
    countdown.stopped().await;
    println!("final state: {:?}", session.state());
    Ok(())
}
