//! # Notifications
//!
//! The popup and banner seam. The store tells a [`Notifier`] that something
//! needs the user's attention and moves on; it never waits for or reads a
//! response.
//!
//! ```text
//! add("vanilla-ice-cream")  ──► notify_reserved()        ──► popup
//! add("strawberry") (banana) ─► notify_error("Strawberries and bananas ..")
//!                                                        ──► 5 s banner
//! ```

use tracing::{info, warn};

/// Receives user-facing notices from the store.
pub trait Notifier {
    /// The reserved add-on was requested.
    fn notify_reserved(&self);

    /// An add was rejected by a composition rule.
    fn notify_error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify_reserved(&self) {
        (**self).notify_reserved();
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}

/// Writes notices to the log. Used when no UI notifier is wired in.
#[derive(Debug, Clone)]
pub struct TracingNotifier {
    reserved_notice: String,
}

impl TracingNotifier {
    pub fn new(reserved_notice: impl Into<String>) -> Self {
        TracingNotifier {
            reserved_notice: reserved_notice.into(),
        }
    }

    /// The popup text logged for the reserved add-on.
    pub fn reserved_notice(&self) -> &str {
        &self.reserved_notice
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        TracingNotifier::new(crate::config::DEFAULT_RESERVED_NOTICE)
    }
}

impl Notifier for TracingNotifier {
    fn notify_reserved(&self) {
        info!(notice = %self.reserved_notice, "Reserved add-on requested");
    }

    fn notify_error(&self, message: &str) {
        warn!(%message, "Basket add rejected");
    }
}
