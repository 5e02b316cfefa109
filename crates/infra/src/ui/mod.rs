//! UI event bus
//!
//! Delivers gateway side effects (notifications, navigation) to whatever
//! front end drives the client, over an unbounded tokio channel.

use labelprint_core::{NavigationSink, NotificationSink, Severity};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Side effect requested by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Notify { severity: Severity, message: String },
    Navigate { path: String },
}

/// Sending half of the event bus. Implements both UI sinks.
#[derive(Debug, Clone)]
pub struct UiEvents {
    tx: UnboundedSender<UiEvent>,
}

impl UiEvents {
    /// Create a bus and the receiver the front end drains.
    #[must_use]
    pub fn channel() -> (Self, UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn emit(&self, event: UiEvent) {
        if let Err(err) = self.tx.send(event) {
            warn!(event = ?err.0, "UI event dropped, receiver closed");
        }
    }
}

impl NotificationSink for UiEvents {
    fn notify(&self, severity: Severity, message: &str) {
        debug!(?severity, text = message, "notification");
        self.emit(UiEvent::Notify { severity, message: message.to_string() });
    }
}

impl NavigationSink for UiEvents {
    fn navigate(&self, path: &str) {
        debug!(path, "navigation");
        self.emit(UiEvent::Navigate { path: path.to_string() });
    }
}
