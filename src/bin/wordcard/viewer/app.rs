//! Main application state and event handling
//!
//! The App struct brings together:
//! - Session (the front-end state, shared with the library)
//! - ContextViewer and WordsViewer (the UI components)
//! - Focus management (which viewer has keyboard focus)
//! - Global key handling (quit, focus switching, delegating to viewers)
//!
//! Every method that can change the session returns the operations to run. The App
//! never talks to the backend itself.

use super::context_viewer::ContextViewer;
use super::viewer::Viewer;
use super::words_viewer::WordsViewer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use wordcard::api::Operation;
use wordcard::session::{Event, Session};

/// Which viewer has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Context,
    Words,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Context => Focus::Words,
            Focus::Words => Focus::Context,
        }
    }
}

/// The main application
pub struct App {
    /// The session holding context, words and notifications
    pub session: Session,

    /// Context viewer (edits the passage, shows word chips)
    pub context_viewer: ContextViewer,

    /// Words viewer (word list and card)
    pub words_viewer: WordsViewer,

    /// Which viewer currently has focus
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Shown in the title bar, usually the backend URL
    pub title: String,
}

impl App {
    pub fn new(session: Session, title: impl Into<String>) -> Self {
        App {
            session,
            context_viewer: ContextViewer::new(),
            words_viewer: WordsViewer::new(),
            focus: Focus::default(),
            should_quit: false,
            title: title.into(),
        }
    }

    /// Operations to run once the UI is up
    pub fn start(&mut self) -> Vec<Operation> {
        self.session.start()
    }

    /// Toggle focus between viewers
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Operation> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Vec::new();
            }
            // In the context field q is just a letter
            KeyCode::Char('q') if key.modifiers.is_empty() && self.focus == Focus::Words => {
                self.should_quit = true;
                return Vec::new();
            }
            KeyCode::Tab => {
                self.toggle_focus();
                return Vec::new();
            }
            _ => {}
        }

        // Delegate to focused viewer
        let event = match self.focus {
            Focus::Context => self.context_viewer.handle_key(key, &self.session),
            Focus::Words => self.words_viewer.handle_key(key, &self.session),
        };

        match event {
            Some(event) => self.apply(event),
            None => Vec::new(),
        }
    }

    /// Handle pasted text; it always lands in the context field
    pub fn handle_paste(&mut self, text: &str) -> Vec<Operation> {
        self.focus = Focus::Context;
        let event = self.context_viewer.paste(text, &self.session);
        self.apply(event)
    }

    /// Apply a session event (user action or completed call)
    pub fn apply(&mut self, event: Event) -> Vec<Operation> {
        self.session.handle(event)
    }

    /// Expire notifications. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }
}
