//! Notification Module
//!
//! Customer and courier texts ride on a pluggable [`Notifier`] trait.
//! Delivery is always fire-and-forget from the caller's perspective:
//! [`send_best_effort`] spawns a task that retries with doubling
//! backoff and logs terminal failures under `target: "notify"`.
//! A failed text never fails the order operation that triggered it.

pub mod messages;
pub mod phone;
mod whatsapp;

pub use phone::{PhoneConfig, normalize_phone};
pub use whatsapp::WhatsAppNotifier;

use async_trait::async_trait;
use shared::AppResult;
use std::sync::Arc;
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const FIRST_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Text message sender
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `body` to a normalized phone number
    async fn send_text(&self, phone: &str, body: &str) -> AppResult<()>;
}

/// Notifier used when no gateway is configured. Logs and drops.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send_text(&self, phone: &str, body: &str) -> AppResult<()> {
        tracing::debug!(
            target: "notify",
            phone = %phone,
            chars = body.len(),
            "No notification gateway configured, dropping text"
        );
        Ok(())
    }
}

/// Queue a text for delivery without blocking the caller.
///
/// Retries up to [`MAX_ATTEMPTS`] times with doubling backoff, then
/// gives up with an error log. Never surfaces a failure to the caller.
pub fn send_best_effort(notifier: Arc<dyn Notifier>, phone: String, body: String) {
    tokio::spawn(async move {
        let mut delay = FIRST_RETRY_DELAY;
        for attempt in 1..=MAX_ATTEMPTS {
            match notifier.send_text(&phone, &body).await {
                Ok(()) => {
                    tracing::debug!(target: "notify", phone = %phone, attempt, "Text delivered");
                    return;
                }
                Err(e) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        target: "notify",
                        phone = %phone,
                        attempt,
                        error = %e,
                        "Text delivery failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!(
                        target: "notify",
                        phone = %phone,
                        attempts = MAX_ATTEMPTS,
                        error = %e,
                        "Text delivery gave up"
                    );
                }
            }
        }
    });
}
