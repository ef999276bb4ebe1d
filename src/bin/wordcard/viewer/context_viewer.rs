//! Context viewer - edits the passage and picks words from it
//!
//! Typed characters, pastes and backspaces are turned into the new raw content of the
//! field and sent to the session, which rebuilds the context. The field always shows
//! the rebuilt context, so collapsed spaces and merged hyphens are visible while
//! typing. Below the field every token is shown as a chip; Left/Right move between
//! chips and Enter records the highlighted one.

use super::viewer::{Viewer, FOCUS_INDICATOR};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use wordcard::session::{Event, Session};

#[derive(Debug, Default)]
pub struct ContextViewer {
    /// Index of the highlighted chip
    cursor: usize,
}

impl ContextViewer {
    pub fn new() -> Self {
        ContextViewer { cursor: 0 }
    }

    /// Highlighted token index, clamped to the current tokens
    pub fn selected_index(&self, session: &Session) -> Option<usize> {
        let count = session.tokens().len();
        if count == 0 {
            None
        } else {
            Some(self.cursor.min(count - 1))
        }
    }

    /// Append pasted text to the field
    ///
    /// The field is a single line, so line breaks become spaces.
    pub fn paste(&mut self, text: &str, session: &Session) -> Event {
        let pasted = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        Event::InputChanged(format!("{}{}", session.context(), pasted))
    }
}

impl Viewer for ContextViewer {
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let title = format!("Context{}", if focused { FOCUS_INDICATOR } else { "" });
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Input line
                Constraint::Length(1), // Spacer
                Constraint::Min(1),    // Chips
            ])
            .split(inner);

        let mut input = vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::raw(session.context()),
        ];
        if focused {
            input.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        frame.render_widget(Paragraph::new(Line::from(input)), chunks[0]);

        let selected = self.selected_index(session);
        let chips = if session.tokenized().is_empty() {
            Line::from(Span::styled(
                "Type or paste a passage, pick a word with ←/→ and record it with Enter",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = Vec::with_capacity(session.tokens().len() * 2);
            for token in session.tokens() {
                let mut style = if token.is_recordable() {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                if Some(token.position) == selected {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                spans.push(Span::styled(format!("[{}]", token.origin), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(chips).wrap(Wrap { trim: false }), chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<Event> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Some(Event::ClearInput)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::InputChanged(format!("{}{}", session.context(), c)))
            }
            KeyCode::Backspace => {
                let mut raw = session.context().to_string();
                raw.pop();
                Some(Event::InputChanged(raw))
            }
            KeyCode::Esc => {
                self.cursor = 0;
                Some(Event::ClearInput)
            }
            KeyCode::Left => {
                self.cursor = self.selected_index(session).unwrap_or(0).saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if let Some(current) = self.selected_index(session) {
                    self.cursor = (current + 1).min(session.tokens().len() - 1);
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = session.tokens().len().saturating_sub(1);
                None
            }
            KeyCode::Enter => {
                let index = self.selected_index(session)?;
                self.cursor = 0;
                Some(Event::RecordToken(index))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn session_with(raw: &str) -> Session {
        let mut session = Session::default();
        session.handle(Event::InputChanged(raw.to_string()));
        session
    }

    #[test]
    fn test_typing_appends_to_context() {
        let session = session_with("hello ");
        let mut viewer = ContextViewer::new();
        assert_eq!(
            viewer.handle_key(key(KeyCode::Char('w')), &session),
            Some(Event::InputChanged("hello w".to_string()))
        );
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let session = session_with("hello ");
        let mut viewer = ContextViewer::new();
        assert_eq!(
            viewer.handle_key(key(KeyCode::Backspace), &session),
            Some(Event::InputChanged("hello".to_string()))
        );
    }

    #[test]
    fn test_cursor_is_clamped() {
        let session = session_with("one two three");
        let mut viewer = ContextViewer::new();
        for _ in 0..5 {
            viewer.handle_key(key(KeyCode::Right), &session);
        }
        assert_eq!(viewer.selected_index(&session), Some(2));

        viewer.handle_key(key(KeyCode::Left), &session);
        assert_eq!(viewer.selected_index(&session), Some(1));
    }

    #[test]
    fn test_enter_records_highlighted_token() {
        let session = session_with("one two three");
        let mut viewer = ContextViewer::new();
        viewer.handle_key(key(KeyCode::End), &session);
        assert_eq!(
            viewer.handle_key(key(KeyCode::Enter), &session),
            Some(Event::RecordToken(2))
        );
        assert_eq!(viewer.selected_index(&session), Some(0));
    }

    #[test]
    fn test_enter_without_tokens_does_nothing() {
        let session = Session::default();
        let mut viewer = ContextViewer::new();
        assert_eq!(viewer.handle_key(key(KeyCode::Enter), &session), None);
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let session = session_with("first ");
        let mut viewer = ContextViewer::new();
        assert_eq!(
            viewer.paste("line\r\nsecond\nthird", &session),
            Event::InputChanged("first line second third".to_string())
        );
    }
}
