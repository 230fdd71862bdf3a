//! Session countdown
//!
//! Fires one tick per second into a [`CheckoutSession`] until the session
//! reaches a terminal state, is torn down, or the countdown is stopped.

use super::CheckoutSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to the background countdown task
///
/// Dropping the handle cancels the task, so a countdown never outlives
/// the scope that registered it.
pub struct Countdown {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking the given session once per second
    pub fn start(session: Arc<CheckoutSession>) -> Self {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; consume it so
            // the session sees its first decrement after a full second.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let state = session.tick();
                        if state.is_terminal() || session.is_closed() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!(session = %session.id(), "countdown stopped");
        });

        Self { shutdown, handle }
    }

    /// Stop the countdown without waiting for the task to finish
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    /// Stop the countdown and wait for the task to finish
    pub async fn stopped(mut self) {
        self.shutdown.cancel();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
