// ABOUTME: Alert handle passed down the UI tree so any component can raise alerts
// A handle without a mounted provider silently ignores every call

use super::provider::AlertEvent;
use crate::models::{AlertKey, NewAlert};
use tokio::sync::mpsc;
use tracing::debug;

/// Cheap, clonable binding to an [`AlertProvider`](super::AlertProvider).
///
/// Components receive one from the root that owns the provider. The default
/// value is not connected to anything, so code that raises alerts works the
/// same whether or not a provider exists.
#[derive(Debug, Clone, Default)]
pub struct AlertHandle {
    sender: Option<mpsc::UnboundedSender<AlertEvent>>,
}

impl AlertHandle {
    /// A handle that drops every request.
    pub fn noop() -> Self {
        Self::default()
    }

    pub(crate) fn connected(sender: mpsc::UnboundedSender<AlertEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Raise an alert. Accepts a full [`NewAlert`] or just a title.
    pub fn add_alert(&self, alert: impl Into<NewAlert>) {
        self.send(AlertEvent::Add(alert.into()));
    }

    pub fn success(&self, title: impl Into<String>) {
        self.add_alert(NewAlert::success(title));
    }

    pub fn danger(&self, title: impl Into<String>) {
        self.add_alert(NewAlert::danger(title));
    }

    pub fn warning(&self, title: impl Into<String>) {
        self.add_alert(NewAlert::warning(title));
    }

    pub fn info(&self, title: impl Into<String>) {
        self.add_alert(NewAlert::info(title));
    }

    /// Ask the provider to close an alert, as the toast close button does.
    pub fn hide_alert(&self, key: AlertKey) {
        self.send(AlertEvent::Hide(key));
    }

    pub fn is_connected(&self) -> bool {
        self.sender.as_ref().is_some_and(|sender| !sender.is_closed())
    }

    fn send(&self, event: AlertEvent) {
        let Some(sender) = &self.sender else {
            return;
        };

        if sender.send(event).is_err() {
            debug!("Alert provider is unmounted, dropping request");
        }
    }
}
