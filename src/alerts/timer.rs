// ABOUTME: Auto-dismiss timers for active alerts
// Each alert gets at most one one-shot tokio task that reports expiry to the provider

use super::provider::AlertEvent;
use crate::models::{Alert, AlertKey};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Delay before an alert closes itself unless it opted out.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(8000);

#[derive(Debug)]
struct TimerRecord {
    // None when the alert skips auto-close
    handle: Option<JoinHandle<()>>,
}

impl TimerRecord {
    fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

#[derive(Debug)]
pub struct AlertTimerManager {
    timers: HashMap<AlertKey, TimerRecord>,
    delay: Duration,
    events: mpsc::UnboundedSender<AlertEvent>,
}

impl AlertTimerManager {
    /// Timers fire after `delay` and report on `events`.
    pub fn new(delay: Duration, events: mpsc::UnboundedSender<AlertEvent>) -> Self {
        Self {
            timers: HashMap::new(),
            delay,
            events,
        }
    }

    /// Bring tracked timers in line with the active list.
    ///
    /// Alerts seen for the first time get a timer (or an empty record when they
    /// skip auto-close). Alerts already tracked keep their running timer, and
    /// records whose alert has left the list are cancelled.
    pub fn sync(&mut self, alerts: &[Alert]) {
        let live: HashSet<AlertKey> = alerts.iter().map(|alert| alert.key).collect();
        self.timers.retain(|key, record| {
            let keep = live.contains(key);
            if !keep {
                record.cancel();
            }
            keep
        });

        let untracked: Vec<(AlertKey, bool)> = alerts
            .iter()
            .filter(|alert| !self.timers.contains_key(&alert.key))
            .map(|alert| (alert.key, alert.auto_closes()))
            .collect();

        for (key, auto_closes) in untracked {
            let handle = if auto_closes {
                self.schedule(key)
            } else {
                debug!("{} skips auto-close", key);
                None
            };
            self.timers.insert(key, TimerRecord { handle });
        }
    }

    fn schedule(&self, key: AlertKey) -> Option<JoinHandle<()>> {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No tokio runtime available, {} will not auto-close", key);
            return None;
        };

        let events = self.events.clone();
        let delay = self.delay;
        debug!("Scheduling auto-close of {} in {:?}", key, delay);

        Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver is gone once the provider unmounts
            let _ = events.send(AlertEvent::Expired(key));
        }))
    }

    /// Cancel and stop tracking the timer for `key`. Returns whether a record existed.
    pub fn forget(&mut self, key: AlertKey) -> bool {
        match self.timers.remove(&key) {
            Some(record) => {
                record.cancel();
                true
            }
            None => false,
        }
    }

    /// Abort every timer and drop all records. Used on teardown.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            debug!("Cancelling {} alert timers", self.timers.len());
        }
        for record in self.timers.values() {
            record.cancel();
        }
        self.timers.clear();
    }

    pub fn is_tracked(&self, key: AlertKey) -> bool {
        self.timers.contains_key(&key)
    }

    /// Whether `key` has a timer that has not fired or been cancelled yet.
    pub fn has_pending_timer(&self, key: AlertKey) -> bool {
        self.timers.get(&key).is_some_and(TimerRecord::is_pending)
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timers.values().filter(|record| record.is_pending()).count()
    }

    pub fn tracked(&self) -> usize {
        self.timers.len()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for AlertTimerManager {
    fn drop(&mut self) {
        for record in self.timers.values() {
            record.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAlert;

    fn alert(key: u64, request: NewAlert) -> Alert {
        Alert::from_request(AlertKey(key), request)
    }

    fn manager() -> (AlertTimerManager, mpsc::UnboundedReceiver<AlertEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AlertTimerManager::new(AUTO_CLOSE_DELAY, tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_schedules_only_auto_closing_alerts() {
        let (mut timers, _rx) = manager();
        let alerts = vec![
            alert(1, NewAlert::new("closes")),
            alert(2, NewAlert::new("sticky").skip_auto_close()),
        ];

        timers.sync(&alerts);

        assert_eq!(timers.tracked(), 2);
        assert_eq!(timers.pending(), 1);
        assert!(timers.has_pending_timer(AlertKey(1)));
        assert!(timers.is_tracked(AlertKey(2)));
        assert!(!timers.has_pending_timer(AlertKey(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_is_reported_once_after_delay() {
        let (mut timers, mut rx) = manager();
        let mut alerts = vec![alert(1, NewAlert::new("a"))];
        timers.sync(&alerts);

        // Later list changes must not restart the existing timer
        tokio::time::sleep(Duration::from_millis(3000)).await;
        alerts.push(alert(2, NewAlert::new("b")));
        timers.sync(&alerts);
        timers.sync(&alerts);
        assert_eq!(timers.tracked(), 2);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(matches!(rx.recv().await, Some(AlertEvent::Expired(key)) if key == AlertKey(1)));

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(matches!(rx.recv().await, Some(AlertEvent::Expired(key)) if key == AlertKey(2)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_forget_cancels_timer() {
        let (mut timers, mut rx) = manager();
        let alerts = vec![alert(1, NewAlert::new("a"))];
        timers.sync(&alerts);

        assert!(timers.forget(AlertKey(1)));
        assert!(!timers.forget(AlertKey(1)));

        tokio::time::sleep(AUTO_CLOSE_DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_drops_records_of_removed_alerts() {
        let (mut timers, mut rx) = manager();
        timers.sync(&[alert(1, NewAlert::new("a")), alert(2, NewAlert::new("b"))]);

        timers.sync(&[alert(2, NewAlert::new("b"))]);
        assert!(!timers.is_tracked(AlertKey(1)));

        tokio::time::sleep(AUTO_CLOSE_DELAY + Duration::from_millis(1)).await;
        assert!(matches!(rx.recv().await, Some(AlertEvent::Expired(key)) if key == AlertKey(2)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_silences_every_timer() {
        let (mut timers, mut rx) = manager();
        let alerts: Vec<Alert> = (1..=5).map(|i| alert(i, NewAlert::new("x"))).collect();
        timers.sync(&alerts);
        assert_eq!(timers.pending(), 5);

        timers.cancel_all();
        assert_eq!(timers.tracked(), 0);

        tokio::time::sleep(AUTO_CLOSE_DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sync_without_runtime_degrades_to_manual_close() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timers = AlertTimerManager::new(AUTO_CLOSE_DELAY, tx);

        timers.sync(&[alert(1, NewAlert::new("a"))]);

        assert!(timers.is_tracked(AlertKey(1)));
        assert_eq!(timers.pending(), 0);
    }
}
