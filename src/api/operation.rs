//! The logical operations the front-end performs against the backend
//!
//! Each operation knows its HTTP method, path, `word` query parameter and body. That
//! is all the client needs; what the backend does with them is its own business.

use crate::model::Record;
use reqwest::Method;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", content = "params", rename_all = "camelCase")]
pub enum Operation {
    /// `POST /word` with `{word, context}`
    RecordWord(Record),
    /// `GET /word`
    ListWords,
    /// `DELETE /word?word=<w>`
    DeleteWord(String),
    /// `GET /define?word=<w>`
    GetDefinition(String),
    /// `PUT /master?word=<w>`
    SetMastered(String),
}

impl Operation {
    /// Short name used in logs and notifications
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RecordWord(_) => "recordWord",
            Operation::ListWords => "listWords",
            Operation::DeleteWord(_) => "deleteWord",
            Operation::GetDefinition(_) => "getDefinition",
            Operation::SetMastered(_) => "setMastered",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::RecordWord(_) => Method::POST,
            Operation::ListWords | Operation::GetDefinition(_) => Method::GET,
            Operation::DeleteWord(_) => Method::DELETE,
            Operation::SetMastered(_) => Method::PUT,
        }
    }

    /// Path relative to the API root, without query
    pub fn path(&self) -> &'static str {
        match self {
            Operation::RecordWord(_) | Operation::ListWords | Operation::DeleteWord(_) => "/word",
            Operation::GetDefinition(_) => "/define",
            Operation::SetMastered(_) => "/master",
        }
    }

    /// Value of the `word` query parameter, if the operation takes one
    pub fn word(&self) -> Option<&str> {
        match self {
            Operation::DeleteWord(word)
            | Operation::GetDefinition(word)
            | Operation::SetMastered(word) => Some(word),
            Operation::RecordWord(_) | Operation::ListWords => None,
        }
    }

    /// JSON body, if the operation sends one
    pub fn body(&self) -> Option<&Record> {
        match self {
            Operation::RecordWord(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())?;
        if let Some(word) = self.word() {
            write!(f, "?word={}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::RecordWord(Record::new("a", "a b")), "POST /word")]
    #[case(Operation::ListWords, "GET /word")]
    #[case(Operation::DeleteWord("terse".into()), "DELETE /word?word=terse")]
    #[case(Operation::GetDefinition("terse".into()), "GET /define?word=terse")]
    #[case(Operation::SetMastered("terse".into()), "PUT /master?word=terse")]
    fn test_operation_table(#[case] operation: Operation, #[case] expected: &str) {
        assert_eq!(operation.to_string(), expected);
    }

    #[test]
    fn test_only_record_has_a_body() {
        let record = Record::new("amicable", "these were amicable examples");
        assert_eq!(
            Operation::RecordWord(record.clone()).body(),
            Some(&record)
        );
        assert_eq!(Operation::ListWords.body(), None);
        assert_eq!(Operation::SetMastered("x".into()).body(), None);
    }
}
