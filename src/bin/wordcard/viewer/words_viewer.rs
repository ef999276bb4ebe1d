//! Words viewer - recorded words and the card of the selected one
//!
//! The left column lists recorded words; the selection is the session's. The card
//! on the right shows the loaded entry: contexts first, then senses by category.

use super::viewer::{Viewer, FOCUS_INDICATOR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use wordcard::model::WordEntry;
use wordcard::session::{Event, Session};

/// Width allocated to the word list
const WORD_LIST_WIDTH: u16 = 30;

#[derive(Debug, Default)]
pub struct WordsViewer;

impl WordsViewer {
    pub fn new() -> Self {
        WordsViewer
    }

    fn select_offset(session: &Session, forward: bool) -> Option<Event> {
        let words = session.words();
        if words.is_empty() {
            return None;
        }

        let next = match (session.selected_index(), forward) {
            (None, _) => 0,
            (Some(current), true) => (current + 1).min(words.len() - 1),
            (Some(current), false) => current.saturating_sub(1),
        };
        if Some(next) == session.selected_index() {
            return None;
        }
        Some(Event::SelectWord(words[next].clone()))
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let title = format!(
            "Words ({}){}",
            session.words().len(),
            if focused { FOCUS_INDICATOR } else { "" }
        );
        let items: Vec<ListItem> = session
            .words()
            .iter()
            .map(|word| ListItem::new(word.as_str()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(session.selected_index());
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let title = match session.entry() {
            Some(entry) => format!("Card ({} senses)", entry.sense_count()),
            None => "Card".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let lines = match session.entry() {
            Some(entry) => card_lines(entry),
            None => {
                let hint = if session.in_flight() > 0 {
                    "Loading..."
                } else if session.words().is_empty() {
                    "No words recorded yet"
                } else {
                    "No word selected"
                };
                vec![Line::from(Span::styled(
                    hint,
                    Style::default().fg(Color::DarkGray),
                ))]
            }
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Lines of a word card
fn card_lines(entry: &WordEntry) -> Vec<Line<'_>> {
    let mut title = vec![Span::styled(
        entry.word.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if entry.mastered {
        title.push(Span::styled(" (mastered)", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(title), Line::default()];

    for context in &entry.context {
        lines.push(Line::from(Span::styled(
            context.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    if !entry.context.is_empty() {
        lines.push(Line::default());
    }

    for definition in entry.definitions() {
        lines.push(Line::from(Span::styled(
            definition.category,
            Style::default().fg(Color::Yellow),
        )));
        for (i, sense) in definition.senses.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {}", i, sense)));
        }
    }

    lines
}

impl Viewer for WordsViewer {
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(WORD_LIST_WIDTH), // Word list
                Constraint::Min(1),                  // Card
            ])
            .split(area);

        self.render_list(frame, chunks[0], session, focused);
        self.render_card(frame, chunks[1], session);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Self::select_offset(session, false),
            KeyCode::Down | KeyCode::Char('j') => Self::select_offset(session, true),
            KeyCode::Enter => session
                .selected_word()
                .map(|word| Event::SelectWord(word.to_string())),
            KeyCode::Char('m') => Some(Event::MarkMastered),
            KeyCode::Char('d') => Some(Event::DeleteSelected),
            KeyCode::Char('r') => Some(Event::RefreshWords),
            KeyCode::Esc => Some(Event::DismissNotification),
            _ => None,
        }
    }
}
