//! Front-end session state and event handling
//!
//! The Session brings together:
//! - the context being edited and its tokens
//! - the recorded word list and the entry of the selected word
//! - the current notification
//!
//! It is driven by [`Event`]s, one per user action and one per finished API call.
//! Handling an event updates the state and returns the [`Operation`]s the caller has
//! to perform; each of those later comes back as an [`Event::Completed`]. The session
//! never performs I/O itself, so any front-end (or a test) can drive it.
//!
//! Completions are applied in arrival order. When two calls race, the one that lands
//! last wins.

pub mod event;
pub mod notification;

pub use event::{Completion, Event};
pub use notification::{Notification, NotificationKind};

use crate::api::Operation;
use crate::model::WordEntry;
use crate::tokenizer::{tokenize, Token, Tokenized};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time a notification stays visible
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Session {
    input: Tokenized,
    words: Vec<String>,
    selected: Option<String>,
    entry: Option<WordEntry>,
    notification: Option<Notification>,
    notification_ttl: Duration,
    in_flight: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl Session {
    pub fn new(notification_ttl: Duration) -> Self {
        Session {
            input: Tokenized::default(),
            words: Vec::new(),
            selected: None,
            entry: None,
            notification: None,
            notification_ttl,
            in_flight: 0,
        }
    }

    /// Operations to run when the front-end starts: load the word list
    pub fn start(&mut self) -> Vec<Operation> {
        self.handle(Event::RefreshWords)
    }

    /// Current context, as it should be shown in the input field
    pub fn context(&self) -> &str {
        &self.input.context
    }

    pub fn tokens(&self) -> &[Token] {
        &self.input.tokens
    }

    pub fn tokenized(&self) -> &Tokenized {
        &self.input
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Index of the selected word in the word list
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.words.iter().position(|word| word == selected)
    }

    pub fn entry(&self) -> Option<&WordEntry> {
        self.entry.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Number of operations handed out that have not completed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handle an event now
    pub fn handle(&mut self, event: Event) -> Vec<Operation> {
        self.handle_at(event, Instant::now())
    }

    /// Handle an event at a given instant (notifications expire relative to it)
    pub fn handle_at(&mut self, event: Event, now: Instant) -> Vec<Operation> {
        let operations = match event {
            Event::InputChanged(raw) => {
                self.input = tokenize(&raw);
                Vec::new()
            }
            Event::ClearInput => {
                self.input = Tokenized::default();
                Vec::new()
            }
            Event::RecordToken(index) => self.record_token(index, now),
            Event::RefreshWords => vec![Operation::ListWords],
            Event::SelectWord(word) => {
                self.selected = Some(word.clone());
                vec![Operation::GetDefinition(word)]
            }
            Event::MarkMastered => match self.selected.clone() {
                Some(word) => vec![Operation::SetMastered(word)],
                None => {
                    self.notify(NotificationKind::Error, "No word selected", now);
                    Vec::new()
                }
            },
            Event::DeleteSelected => match self.selected.clone() {
                Some(word) => vec![Operation::DeleteWord(word)],
                None => {
                    self.notify(NotificationKind::Error, "No word selected", now);
                    Vec::new()
                }
            },
            Event::DismissNotification => {
                self.notification = None;
                Vec::new()
            }
            Event::Completed(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.apply_completion(completion, now)
            }
        };

        self.in_flight += operations.len();
        operations
    }

    /// Drop the notification once it has expired. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some(notification) if notification.is_expired(now) => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    fn record_token(&mut self, index: usize, now: Instant) -> Vec<Operation> {
        let Some(token) = self.input.tokens.get(index) else {
            return Vec::new();
        };

        match self.input.record(index) {
            Some(record) => {
                debug!(word = %record.word, "recording word");
                self.input = Tokenized::default();
                vec![Operation::RecordWord(record)]
            }
            None => {
                let message = format!("Nothing to record in '{}'", token.origin);
                self.notify(NotificationKind::Error, message, now);
                Vec::new()
            }
        }
    }

    fn apply_completion(&mut self, completion: Completion, now: Instant) -> Vec<Operation> {
        let Completion { operation, result } = completion;
        debug!(operation = operation.name(), success = result.success, "operation completed");

        match operation {
            Operation::RecordWord(record) => {
                if result.success {
                    let message = result.message_or(format!("Recorded {}", record.word));
                    self.notify(NotificationKind::Success, message, now);
                } else {
                    let message = format!(
                        "Record failed: {}",
                        result.message().unwrap_or("unknown error")
                    );
                    self.notify(NotificationKind::Error, message, now);
                }
                Vec::new()
            }
            Operation::ListWords => {
                if !result.success {
                    let message = result.message_or("Failed to load words");
                    self.notify(NotificationKind::Error, message, now);
                    return Vec::new();
                }
                match result.words() {
                    Ok(words) => self.replace_words(words),
                    Err(err) => {
                        self.notify(NotificationKind::Error, err.to_string(), now);
                        Vec::new()
                    }
                }
            }
            Operation::GetDefinition(word) => {
                if !result.success {
                    // Selection falls back to the word on the card
                    self.selected = self.entry.as_ref().map(|entry| entry.word.clone());
                    let message = result.message_or(format!("Failed to load '{}'", word));
                    self.notify(NotificationKind::Error, message, now);
                    return Vec::new();
                }
                match result.entry() {
                    Ok(entry) => {
                        self.selected = Some(if entry.word.is_empty() {
                            word
                        } else {
                            entry.word.clone()
                        });
                        self.entry = Some(entry);
                    }
                    Err(err) => {
                        self.selected = self.entry.as_ref().map(|entry| entry.word.clone());
                        self.notify(NotificationKind::Error, err.to_string(), now);
                    }
                }
                Vec::new()
            }
            Operation::SetMastered(word) => {
                let kind = NotificationKind::from_success(result.success);
                let message = if result.success {
                    if let Some(entry) = self.entry.as_mut().filter(|e| e.word == word) {
                        entry.mastered = true;
                    }
                    result.message_or(format!("Marked '{}' as mastered", word))
                } else {
                    result.message_or(format!("Failed to mark '{}' as mastered", word))
                };
                self.notify(kind, message, now);
                Vec::new()
            }
            Operation::DeleteWord(word) => {
                let kind = NotificationKind::from_success(result.success);
                let message = if result.success {
                    if self.selected.as_deref() == Some(word.as_str()) {
                        self.selected = None;
                        self.entry = None;
                    }
                    result.message_or(format!("Deleted '{}'", word))
                } else {
                    result.message_or(format!("Failed to delete '{}'", word))
                };
                self.notify(kind, message, now);
                vec![Operation::ListWords]
            }
        }
    }

    /// Install a fresh word list, keeping the selection when it survived
    fn replace_words(&mut self, words: Vec<String>) -> Vec<Operation> {
        self.words = words;

        let still_listed = self
            .selected
            .as_ref()
            .is_some_and(|selected| self.words.contains(selected));
        if still_listed {
            return Vec::new();
        }

        self.entry = None;
        match self.words.first().cloned() {
            Some(first) => {
                self.selected = Some(first.clone());
                vec![Operation::GetDefinition(first)]
            }
            None => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification::new(kind, message, now, self.notification_ttl));
    }
}
