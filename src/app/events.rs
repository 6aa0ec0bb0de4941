// ABOUTME: Event handling system mapping keyboard input to alert demo actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::AppState;
use crate::models::{AlertVariant, NewAlert};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    RaiseAlert(AlertVariant),
    RaiseSticky,       // Alert that never auto-closes
    RaiseWithBody,     // Alert carrying a styled body
    NextAlert,
    PreviousAlert,
    CloseSelected,
    ClearAlerts,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('1') => Some(AppEvent::RaiseAlert(AlertVariant::Default)),
            KeyCode::Char('2') => Some(AppEvent::RaiseAlert(AlertVariant::Success)),
            KeyCode::Char('3') => Some(AppEvent::RaiseAlert(AlertVariant::Danger)),
            KeyCode::Char('4') => Some(AppEvent::RaiseAlert(AlertVariant::Warning)),
            KeyCode::Char('5') => Some(AppEvent::RaiseAlert(AlertVariant::Info)),
            KeyCode::Char('s') => Some(AppEvent::RaiseSticky),
            KeyCode::Char('b') => Some(AppEvent::RaiseWithBody),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextAlert),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousAlert),
            KeyCode::Char('x') | KeyCode::Enter => Some(AppEvent::CloseSelected),
            KeyCode::Char('c') => Some(AppEvent::ClearAlerts),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        // Raising goes through the handle, like any component below the root would
        let alerts = state.alert_handle();

        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::RaiseAlert(variant) => {
                let number = state.next_title_number();
                alerts.add_alert(
                    NewAlert::new(format!("{} alert #{number}", Self::capitalized(variant.label())))
                        .variant(variant)
                        .data_test_id(format!("demo-alert-{number}")),
                );
            }
            AppEvent::RaiseSticky => {
                let number = state.next_title_number();
                alerts.add_alert(
                    NewAlert::warning(format!("Sticky alert #{number}"))
                        .body("Stays until closed with x")
                        .skip_auto_close(),
                );
            }
            AppEvent::RaiseWithBody => {
                let number = state.next_title_number();
                alerts.add_alert(
                    NewAlert::info(format!("Details #{number}")).body(Self::sample_body()),
                );
            }
            AppEvent::NextAlert => state.next_alert(),
            AppEvent::PreviousAlert => state.previous_alert(),
            AppEvent::CloseSelected => {
                state.close_selected();
            }
            AppEvent::ClearAlerts => {
                state.alerts.clear();
                state.clamp_selection();
            }
        }
    }

    fn capitalized(word: &str) -> String {
        let mut chars = word.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default()
    }

    fn sample_body() -> Text<'static> {
        Text::from(vec![
            Line::from(vec![
                Span::raw("Raised at "),
                Span::styled(
                    chrono::Local::now().format("%H:%M:%S").to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Closes by itself unless dismissed",
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }
}
