// ABOUTME: Application state for the alert demo: the mounted alert provider and selection

use crate::alerts::{AlertHandle, AlertProvider, AlertSettings};
use crate::config::AppConfig;
use crate::models::{Alert, AlertKey};
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct AppState {
    pub alerts: AlertProvider,
    /// Alert the user has selected in the toast group.
    pub selected_alert: Option<AlertKey>,
    // Position of the selected alert when last seen, used when it disappears
    selection_index: usize,
    pub help_visible: bool,
    pub should_quit: bool,
    pub max_visible: usize,
    // Counter used to number demo alerts
    pub raised_count: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AlertSettings::default(), 5)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AlertSettings, max_visible: usize) -> Self {
        Self {
            alerts: AlertProvider::new(settings),
            selected_alert: None,
            selection_index: 0,
            help_visible: false,
            should_quit: false,
            max_visible,
            raised_count: 0,
        }
    }

    /// Binding given to components that raise alerts.
    pub fn alert_handle(&self) -> AlertHandle {
        self.alerts.handle()
    }

    /// The selected alert, if it is still active.
    pub fn selected_alert(&self) -> Option<&Alert> {
        self.selected_alert.and_then(|key| self.alerts.get(key))
    }

    pub fn selected_key(&self) -> Option<AlertKey> {
        self.selected_alert().map(|alert| alert.key)
    }

    /// Current list position of the selected alert.
    pub fn selected_index(&self) -> Option<usize> {
        let key = self.selected_alert?;
        self.alerts.alerts().iter().position(|alert| alert.key == key)
    }

    fn select_index(&mut self, index: usize) {
        self.selected_alert = self.alerts.alerts().get(index).map(|alert| alert.key);
        self.selection_index = index;
    }

    pub fn next_alert(&mut self) {
        let count = self.alerts.len();
        if count == 0 {
            self.selected_alert = None;
            return;
        }
        let next = match self.selected_index() {
            Some(index) if index + 1 < count => index + 1,
            _ => 0,
        };
        self.select_index(next);
    }

    pub fn previous_alert(&mut self) {
        let count = self.alerts.len();
        if count == 0 {
            self.selected_alert = None;
            return;
        }
        let previous = match self.selected_index() {
            Some(index) if index > 0 => index - 1,
            _ => count - 1,
        };
        self.select_index(previous);
    }

    /// Keep the selection on the same alert after the list changed. When that
    /// alert is gone, select whichever alert took its place.
    pub fn clamp_selection(&mut self) {
        let count = self.alerts.len();
        if count == 0 {
            self.selected_alert = None;
            return;
        }

        if let Some(index) = self.selected_index() {
            self.selection_index = index;
            return;
        }

        let fallback = if self.selected_alert.is_some() {
            self.selection_index.min(count - 1)
        } else {
            count - 1
        };
        self.select_index(fallback);
    }

    /// Dismiss the selected alert and move the selection to its neighbour.
    pub fn close_selected(&mut self) -> bool {
        let Some(key) = self.selected_key() else {
            return false;
        };
        let closed = self.alerts.hide_alert(key);
        self.clamp_selection();
        closed
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn next_title_number(&mut self) -> u32 {
        self.raised_count += 1;
        self.raised_count
    }
}

/// Top-level application: state plus the loop timing.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub tick_rate: Duration,
    needs_refresh: bool,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            "Starting alert demo (auto-close {} ms, max visible {})",
            config.alerts.auto_close_ms, config.ui.max_visible
        );
        Self {
            state: AppState::with_settings(config.alert_settings(), config.ui.max_visible),
            tick_rate: config.tick_rate(),
            needs_refresh: false,
        }
    }

    /// Apply queued alert requests and expiries. Called once per UI tick.
    pub fn tick(&mut self) {
        if self.state.alerts.process_events() > 0 {
            self.state.clamp_selection();
            self.needs_refresh = true;
        }
    }

    /// Whether the last tick changed something on screen. Resets the flag.
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    pub fn shutdown(&mut self) {
        self.state.alerts.unmount();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
