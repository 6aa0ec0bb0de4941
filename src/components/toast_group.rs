// ABOUTME: Toast group component drawing active alerts stacked in the top-right corner
// Shows the newest alerts up to a limit and summarises the rest

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::{Alert, AlertBody, AlertKey, AlertVariant};

const TOAST_WIDTH: u16 = 48;

pub struct ToastGroupComponent {
    max_visible: usize,
}

impl ToastGroupComponent {
    pub fn new(max_visible: usize) -> Self {
        Self {
            max_visible: max_visible.max(1),
        }
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Draw `alerts` (oldest first) over `area`. The toast whose key matches
    /// `selected` is highlighted and carries the close hint.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        alerts: &[Alert],
        selected: Option<AlertKey>,
    ) {
        if alerts.is_empty() || area.width < 4 || area.height < 3 {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);
        let inner_width = usize::from(width.saturating_sub(2));
        let x = area.x + area.width - width;
        let bottom = area.y + area.height;
        let mut y = area.y;

        let hidden = alerts.len().saturating_sub(self.max_visible);
        if hidden > 0 {
            let summary = Rect::new(x, y, width, 1);
            frame.render_widget(Clear, summary);
            frame.render_widget(
                Paragraph::new(format!("+{hidden} more"))
                    .alignment(Alignment::Right)
                    .style(Style::default().fg(Color::DarkGray)),
                summary,
            );
            y += 1;
        }

        for alert in &alerts[hidden..] {
            if y >= bottom {
                break;
            }
            let lines = Self::toast_lines(alert, inner_width);
            let height = Self::toast_height(&lines).min(bottom - y);
            let toast_area = Rect::new(x, y, width, height);

            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                Self::toast(alert, lines, selected == Some(alert.key)),
                toast_area,
            );
            y += height;
        }
    }

    /// Title and body rows, already wrapped to `width` columns.
    fn toast_lines(alert: &Alert, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            alert.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        match &alert.body {
            Some(AlertBody::Text(text)) => {
                lines.extend(text.lines().map(|l| Line::from(l.to_string())));
            }
            Some(AlertBody::Rich(text)) => lines.extend(text.lines.iter().cloned()),
            None => {}
        }

        lines.iter().flat_map(|line| wrap_line(line, width)).collect()
    }

    fn toast(alert: &Alert, lines: Vec<Line<'static>>, is_selected: bool) -> Paragraph<'static> {
        let color = Self::variant_color(alert.variant);

        let title = if is_selected {
            format!(" {} {} [x] ", alert.variant.indicator(), alert.variant.label())
        } else {
            format!(" {} {} ", alert.variant.indicator(), alert.variant.label())
        };

        let border_style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::White))
    }

    fn toast_height(lines: &[Line<'static>]) -> u16 {
        u16::try_from(lines.len() + 2).unwrap_or(u16::MAX)
    }

    pub fn variant_color(variant: AlertVariant) -> Color {
        match variant {
            AlertVariant::Default => Color::Gray,
            AlertVariant::Success => Color::Green,
            AlertVariant::Danger => Color::Red,
            AlertVariant::Warning => Color::Yellow,
            AlertVariant::Info => Color::Cyan,
            AlertVariant::Custom => Color::Magenta,
        }
    }
}

/// Split `line` into rows no wider than `width`, breaking between characters
/// and keeping each span's style.
fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line.clone()];
    }

    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        let mut segment = String::new();
        for ch in span.content.chars() {
            let ch_width = Span::raw(ch.to_string()).width();
            if used + ch_width > width && used > 0 {
                if !segment.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut segment), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            segment.push(ch);
            used += ch_width;
        }
        if !segment.is_empty() {
            row.push(Span::styled(segment, span.style));
        }
    }
    if !row.is_empty() {
        rows.push(Line::from(row));
    }
    rows
}

impl Default for ToastGroupComponent {
    fn default() -> Self {
        Self::new(5)
    }
}
