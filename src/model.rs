//! Data exchanged with the word backend
//!
//! [`Record`] is what the front-end sends when a word is picked. [`WordEntry`] is the
//! backend's view of a recorded word; the front-end only reads it, flips its mastered
//! flag, or asks for its deletion.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A word and the passage it was picked from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub word: String,
    pub context: String,
}

impl Record {
    pub fn new(word: impl Into<String>, context: impl Into<String>) -> Self {
        Record {
            word: word.into(),
            context: context.into(),
        }
    }
}

/// A recorded word as returned by `GET /define`
///
/// The backend omits empty fields and may send `null` for them, so every field but
/// `word` falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mastered: bool,
    /// Every context the word was recorded with
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: Vec<String>,
    /// Senses grouped by category (part of speech)
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: BTreeMap<String, Vec<String>>,
}

/// One category of senses of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition<'a> {
    pub category: &'a str,
    pub senses: &'a [String],
}

impl WordEntry {
    /// Definitions in category order
    pub fn definitions(&self) -> impl Iterator<Item = Definition<'_>> {
        self.definitions
            .iter()
            .map(|(category, senses)| Definition {
                category: category.as_str(),
                senses: senses.as_slice(),
            })
    }

    pub fn sense_count(&self) -> usize {
        self.definitions.values().map(Vec::len).sum()
    }
}

/// Readable rendering, one block per category
///
/// ```text
/// amicable (mastered)
///
/// adjective
///     0. friendly and pleasant
///
/// Contexts
///     - these were amicable examples
/// ```
impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if self.mastered {
            write!(f, " (mastered)")?;
        }
        writeln!(f)?;

        for definition in self.definitions() {
            writeln!(f)?;
            writeln!(f, "{}", definition.category)?;
            for (i, sense) in definition.senses.iter().enumerate() {
                writeln!(f, "    {}. {}", i, sense)?;
            }
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Contexts")?;
            for context in &self.context {
                writeln!(f, "    - {}", context)?;
            }
        }

        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_word_and_context() {
        let record = Record::new("amicable", "these were amicable examples");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"word": "amicable", "context": "these were amicable examples"})
        );
    }

    #[test]
    fn test_entry_with_omitted_fields() {
        let entry: WordEntry = serde_json::from_value(json!({"word": "terse"})).unwrap();
        assert_eq!(entry.word, "terse");
        assert!(!entry.mastered);
        assert!(entry.context.is_empty());
        assert!(entry.definitions.is_empty());
    }

    #[test]
    fn test_entry_with_null_fields() {
        let entry: WordEntry = serde_json::from_value(json!({
            "word": "terse",
            "mastered": null,
            "context": null,
            "definitions": null
        }))
        .unwrap();
        assert_eq!(entry, WordEntry {
            word: "terse".to_string(),
            ..WordEntry::default()
        });
    }

    #[test]
    fn test_definitions_are_grouped_by_category() {
        let entry: WordEntry = serde_json::from_value(json!({
            "word": "fair",
            "definitions": {
                "noun": ["a gathering of stalls"],
                "adjective": ["treating people equally", "reasonably good"]
            }
        }))
        .unwrap();

        let categories: Vec<&str> = entry.definitions().map(|d| d.category).collect();
        assert_eq!(categories, vec!["adjective", "noun"]);
        assert_eq!(entry.sense_count(), 3);
    }

    #[test]
    fn test_display() {
        let entry = WordEntry {
            word: "amicable".to_string(),
            mastered: true,
            context: vec!["these were amicable examples".to_string()],
            definitions: BTreeMap::from([(
                "adjective".to_string(),
                vec![
                    "friendly and pleasant".to_string(),
                    "without serious disagreement".to_string(),
                ],
            )]),
        };

        insta::assert_snapshot!(entry.to_string(), @r###"
        amicable (mastered)

        adjective
            0. friendly and pleasant
            1. without serious disagreement

        Contexts
            - these were amicable examples
        "###);
    }
}
