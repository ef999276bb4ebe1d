//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Context viewer (8 lines, fixed)
//! - Words viewer (remaining space): word list (30 chars) | card
//! - Status bar (1 line, fixed): latest notification, or key help

use super::app::{App, Focus};
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use wordcard::session::NotificationKind;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Height of the context viewer
const CONTEXT_PANEL_HEIGHT: u16 = 8;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Title bar
            Constraint::Length(CONTEXT_PANEL_HEIGHT), // Context
            Constraint::Min(3),                       // Words | card
            Constraint::Length(1),                    // Status bar
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);
    app.context_viewer
        .render(frame, chunks[1], &app.session, app.focus == Focus::Context);
    app.words_viewer
        .render(frame, chunks[2], &app.session, app.focus == Focus::Words);
    render_status_bar(frame, chunks[3], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut title = format!("wordcard:: {}", app.title);
    if app.session.in_flight() > 0 {
        title.push_str(" (working...)");
    }
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = match app.session.notification() {
        Some(notification) => {
            let color = match notification.kind {
                NotificationKind::Success => Color::Green,
                NotificationKind::Error => Color::Red,
            };
            Paragraph::new(notification.message.as_str())
                .style(Style::default().fg(Color::Black).bg(color))
        }
        None => {
            let help = match app.focus {
                Focus::Context => "Tab: words  ←/→: pick  Enter: record  Esc: clear  Ctrl+C: quit",
                Focus::Words => "Tab: context  ↑/↓: select  m: mastered  d: delete  r: refresh  q: quit",
            };
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
        }
    };
    frame.render_widget(paragraph, area);
}
