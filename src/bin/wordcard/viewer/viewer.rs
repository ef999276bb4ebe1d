//! Viewer trait
//!
//! The Viewer trait defines a common interface for UI components that:
//! - Render themselves given the session and an area
//! - Handle keyboard input and return the session event it stands for
//!
//! This abstraction allows the context pane and the word pane to be treated
//! uniformly by the main App.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use wordcard::session::{Event, Session};

/// Suffix appended to the title of the pane that has keyboard focus
pub const FOCUS_INDICATOR: &str = " [FOCUSED]";

/// Trait for UI viewers
///
/// A viewer only ever reads the session. Anything that should change it is returned
/// as an [`Event`] and applied by the App.
pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool);

    /// Handle a keyboard event and return the resulting session event, if any
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<Event>;
}
