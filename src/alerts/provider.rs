// ABOUTME: Alert provider owning the active alert list and its dismissal timers
// Requests from handles and timer expiries arrive over a channel and are applied on the UI loop

use super::context::AlertHandle;
use super::store::AlertStore;
use super::timer::{AlertTimerManager, AUTO_CLOSE_DELAY};
use crate::models::{Alert, AlertKey, NewAlert};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Messages delivered to the provider.
#[derive(Debug)]
pub enum AlertEvent {
    Add(NewAlert),
    /// Explicit close, e.g. the user dismissing a toast.
    Hide(AlertKey),
    /// Sent by an auto-close timer.
    Expired(AlertKey),
}

/// What applying one event did to the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChange {
    Added(AlertKey),
    Dismissed(AlertKey),
    Expired(AlertKey),
    /// The event referred to an alert that is already gone.
    Ignored,
}

impl AlertChange {
    /// Whether the alert list changed.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, AlertChange::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    pub auto_close: Duration,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            auto_close: AUTO_CLOSE_DELAY,
        }
    }
}

#[derive(Debug)]
pub struct AlertProvider {
    store: AlertStore,
    timers: AlertTimerManager,
    events_tx: mpsc::UnboundedSender<AlertEvent>,
    events_rx: mpsc::UnboundedReceiver<AlertEvent>,
    mounted: bool,
}

impl Default for AlertProvider {
    fn default() -> Self {
        Self::new(AlertSettings::default())
    }
}

impl AlertProvider {
    pub fn new(settings: AlertSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        info!("Mounting alert provider (auto-close after {:?})", settings.auto_close);

        Self {
            store: AlertStore::new(),
            timers: AlertTimerManager::new(settings.auto_close, events_tx.clone()),
            events_tx,
            events_rx,
            mounted: true,
        }
    }

    /// Binding handed to the parts of the UI that raise alerts.
    pub fn handle(&self) -> AlertHandle {
        if self.mounted {
            AlertHandle::connected(self.events_tx.clone())
        } else {
            AlertHandle::noop()
        }
    }

    /// Append an alert right away and start its auto-close timer.
    /// Returns `None` once the provider has been unmounted.
    pub fn add_alert(&mut self, request: impl Into<NewAlert>) -> Option<AlertKey> {
        if !self.mounted {
            debug!("Ignoring alert on unmounted provider");
            return None;
        }

        let key = self.store.push(request.into());
        self.timers.sync(self.store.alerts());
        Some(key)
    }

    /// Remove the alert with `key` and its timer. Unknown keys are a no-op.
    pub fn hide_alert(&mut self, key: AlertKey) -> bool {
        if !self.mounted {
            return false;
        }

        self.timers.forget(key);
        let removed = self.store.remove(key).is_some();
        if removed {
            debug!("Dismissed {}", key);
        }
        removed
    }

    /// Remove every alert and cancel their timers.
    pub fn clear(&mut self) -> usize {
        if !self.mounted {
            return 0;
        }

        self.timers.cancel_all();
        self.store.clear().len()
    }

    /// Apply every queued request and expiry without waiting.
    /// Returns how many of them changed the active list.
    pub fn process_events(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            if self.apply(event).is_mutation() {
                changed += 1;
            }
        }
        changed
    }

    /// Wait for the next event and apply it. `None` after unmount.
    pub async fn next_event(&mut self) -> Option<AlertChange> {
        let event = self.events_rx.recv().await?;
        Some(self.apply(event))
    }

    fn apply(&mut self, event: AlertEvent) -> AlertChange {
        match event {
            AlertEvent::Add(request) => self
                .add_alert(request)
                .map_or(AlertChange::Ignored, AlertChange::Added),
            AlertEvent::Hide(key) => {
                if self.hide_alert(key) {
                    AlertChange::Dismissed(key)
                } else {
                    AlertChange::Ignored
                }
            }
            AlertEvent::Expired(key) => {
                if self.hide_alert(key) {
                    debug!("{} auto-closed", key);
                    AlertChange::Expired(key)
                } else {
                    AlertChange::Ignored
                }
            }
        }
    }

    /// Tear the provider down: cancel pending timers and refuse further requests.
    /// Alerts already shown stay readable but never change again.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        info!("Unmounting alert provider with {} active alerts", self.store.len());
        self.mounted = false;
        self.timers.cancel_all();
        self.events_rx.close();
        while self.events_rx.try_recv().is_ok() {}
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Active alerts, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        self.store.alerts()
    }

    pub fn get(&self, key: AlertKey) -> Option<&Alert> {
        self.store.get(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn auto_close_delay(&self) -> Duration {
        self.timers.delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertVariant;

    #[tokio::test(start_paused = true)]
    async fn test_add_then_hide() {
        let mut provider = AlertProvider::default();
        let key = provider.add_alert("Saved").unwrap();

        assert_eq!(provider.len(), 1);
        assert_eq!(provider.pending_timers(), 1);

        assert!(provider.hide_alert(key));
        assert!(provider.is_empty());
        assert_eq!(provider.pending_timers(), 0);
        assert!(!provider.hide_alert(key));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_requests_are_applied_in_order() {
        let mut provider = AlertProvider::default();
        let handle = provider.handle();

        handle.add_alert("one");
        handle.danger("two");
        handle.add_alert(NewAlert::info("three").skip_auto_close());
        assert!(provider.is_empty());

        assert_eq!(provider.process_events(), 3);
        let variants: Vec<AlertVariant> = provider.alerts().iter().map(|a| a.variant).collect();
        assert_eq!(
            variants,
            vec![AlertVariant::Default, AlertVariant::Danger, AlertVariant::Info]
        );
        assert_eq!(provider.pending_timers(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_expiry_is_ignored() {
        let mut provider = AlertProvider::default();
        let key = provider.add_alert("gone").unwrap();
        provider.hide_alert(key);

        provider.events_tx.send(AlertEvent::Expired(key)).unwrap();
        assert_eq!(provider.next_event().await, Some(AlertChange::Ignored));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_everything() {
        let mut provider = AlertProvider::default();
        let handle = provider.handle();
        provider.add_alert("a");
        handle.add_alert("queued before teardown");

        provider.unmount();

        assert!(!provider.is_mounted());
        assert!(!handle.is_connected());
        assert_eq!(provider.pending_timers(), 0);
        assert_eq!(provider.next_event().await, None);
        assert_eq!(provider.add_alert("late"), None);
        assert_eq!(provider.len(), 1);
    }
}
