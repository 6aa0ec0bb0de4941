// ABOUTME: Ordered in-memory list of active alerts and the key generator
// Appends keep insertion order; removal is by key and never reorders survivors

use crate::models::{Alert, AlertKey, NewAlert};
use tracing::debug;

#[derive(Debug)]
pub struct AlertStore {
    alerts: Vec<Alert>,
    next_key: u64,
}

impl Default for AlertStore {
    fn default() -> Self {
        Self {
            alerts: Vec::new(),
            next_key: 1,
        }
    }
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert built from `request` and return its freshly generated key.
    pub fn push(&mut self, request: NewAlert) -> AlertKey {
        let key = AlertKey(self.next_key);
        self.next_key += 1;

        debug!(
            "Adding {} ({}): {:?}",
            key,
            request.variant.label(),
            request.title
        );
        self.alerts.push(Alert::from_request(key, request));
        key
    }

    /// Remove the alert with `key`. Unknown keys leave the list untouched.
    pub fn remove(&mut self, key: AlertKey) -> Option<Alert> {
        let position = self.alerts.iter().position(|alert| alert.key == key)?;
        Some(self.alerts.remove(position))
    }

    /// Active alerts, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Look up an active alert by key.
    pub fn get(&self, key: AlertKey) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.key == key)
    }

    pub fn contains(&self, key: AlertKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Drop every alert. Keys keep counting up so cleared keys are never reissued.
    pub fn clear(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }
}
