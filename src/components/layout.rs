// ABOUTME: Main layout component: alert list pane, toast overlay and bottom menu bar

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{HelpComponent, ToastGroupComponent};
use crate::app::AppState;

pub struct LayoutComponent {
    toasts: ToastGroupComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: ToastGroupComponent::new(max_visible),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status line
                Constraint::Min(0),     // Alert list
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        self.render_status(frame, main_chunks[0], state);
        self.render_alert_list(frame, main_chunks[1], state);
        self.render_menu_bar(frame, main_chunks[2]);

        // Toasts float over the content area
        self.toasts.render(
            frame,
            main_chunks[1],
            state.alerts.alerts(),
            state.selected_key(),
        );

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status = format!(
            "Active alerts: {}  Pending timers: {}  Auto-close: {} ms",
            state.alerts.len(),
            state.alerts.pending_timers(),
            state.alerts.auto_close_delay().as_millis()
        );

        let paragraph = Paragraph::new(status)
            .block(
                Block::default()
                    .title("Alert Box")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }

    fn render_alert_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .alerts
            .alerts()
            .iter()
            .map(|alert| {
                let mode = if alert.skip_auto_close { "sticky" } else { "auto" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", alert.variant.indicator()),
                        Style::default().fg(ToastGroupComponent::variant_color(alert.variant)),
                    ),
                    Span::raw(alert.title.clone()),
                    Span::styled(
                        format!("  [{}, {}]", alert.key, mode),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Active Alerts")
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default();
        list_state.select(state.selected_index());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[1-5]raise [s]ticky [b]ody [x]close [c]lear [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new(5)
    }
}
