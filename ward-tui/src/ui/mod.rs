//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Nothing here touches the controller; the shell hands over a
//! [`Snapshot`] each frame.

mod panels;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use libwardview::View;

use crate::app::AppState;
use crate::shell::Snapshot;

/// Render the application UI
///
/// Header, the active view's panel, status bar, then any overlay.
pub fn render(frame: &mut Frame, state: &AppState, snapshot: &Snapshot) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Active panel
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state, snapshot);
    panels::render_view(frame, chunks[1], state, snapshot);
    render_status_bar(frame, chunks[2], state, snapshot);

    if state.notifications_open {
        render_notifications_overlay(frame, area, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Style `color` only when colors are enabled
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let bell = if snapshot.badge > 0 {
        Span::styled(
            format!(" [n] Bell ({}) ", snapshot.badge),
            fg(state, Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" [n] Bell ", fg(state, Color::Gray))
    };

    let line = Line::from(vec![
        Span::styled(
            "Ward Dashboard",
            fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  >  "),
        Span::raw(snapshot.view.title()),
        Span::raw("   "),
        bell,
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let hints = if snapshot.view == View::Dashboard {
        "1-7/Enter: Open | n: Notifications | F1: Help | q: Quit"
    } else {
        "Esc/b: Back | n: Notifications | F1: Help | q: Quit"
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        spans.push(Span::styled(message.as_str(), fg(state, Color::Green)));
        spans.push(Span::raw(" | "));
    }
    if !snapshot.live {
        spans.push(Span::styled("live data off", fg(state, Color::Yellow)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, fg(state, Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_notifications_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 40, area);

    let text = vec![
        Line::from(Span::styled(
            "Notifications",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Critical alert: Bob Anderson, imminent cardiac arrest risk"),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let notifications = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Notifications ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(notifications, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1 / ?     - Toggle help"),
        Line::from("  1-7        - Open a stat card"),
        Line::from("  n          - Notifications"),
        Line::from("  Esc / b    - Back"),
        Line::from(""),
        Line::from("Dashboard / Critical Patients:"),
        Line::from("  Up / Down  - Move cursor"),
        Line::from("  Enter      - Open card / select patient"),
        Line::from(""),
        Line::from("Patient Alert:"),
        Line::from("  s          - Cardiac specialists"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            fg(state, Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);

        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
