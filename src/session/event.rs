//! Inbound events and call completions

use crate::api::{ApiClient, ApiResult, Operation};

/// One user action, or the outcome of one API call
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The raw content of the context field changed
    InputChanged(String),
    /// Empty the context field
    ClearInput,
    /// Record the token at this index with the current context
    RecordToken(usize),
    /// Reload the recorded word list
    RefreshWords,
    /// Show the entry of a recorded word
    SelectWord(String),
    /// Mark the selected word as mastered
    MarkMastered,
    /// Delete the selected word
    DeleteSelected,
    /// Hide the current notification
    DismissNotification,
    /// An operation returned
    Completed(Completion),
}

/// An operation paired with what it resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub operation: Operation,
    pub result: ApiResult,
}

impl Completion {
    pub fn new(operation: Operation, result: ApiResult) -> Self {
        Completion { operation, result }
    }

    /// Perform `operation` with `client` and wrap the outcome
    pub async fn run(client: &ApiClient, operation: Operation) -> Self {
        let result = client.call(&operation).await;
        Completion { operation, result }
    }
}

impl From<Completion> for Event {
    fn from(completion: Completion) -> Self {
        Event::Completed(completion)
    }
}
