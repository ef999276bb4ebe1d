//! Uniform outcome of an API call

use super::ApiError;
use crate::model::WordEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What every call resolves to, success or not
///
/// `success` mirrors the 2xx status class of the response. Anything that went wrong
/// before a response could be read (connection refused, malformed body, ...) gives
/// `success == false` with a diagnostic in `msg`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Body shape shared by every backend endpoint
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl ApiResult {
    pub fn failure(msg: impl Into<String>) -> Self {
        ApiResult {
            success: false,
            data: None,
            msg: Some(msg.into()),
        }
    }

    /// Decode a response body received with the given success flag
    ///
    /// An empty body is a valid, empty envelope. Empty messages and null data are
    /// treated as absent.
    pub fn from_body(success: bool, body: &[u8]) -> Result<Self, ApiError> {
        let envelope = if body.iter().all(u8::is_ascii_whitespace) {
            Envelope::default()
        } else {
            serde_json::from_slice::<Envelope>(body)?
        };

        Ok(ApiResult {
            success,
            data: envelope.data.filter(|data| !data.is_null()),
            msg: envelope.msg.filter(|msg| !msg.is_empty()),
        })
    }

    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    /// The message, or `fallback` when the backend sent none
    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        self.msg.clone().unwrap_or_else(|| fallback.into())
    }

    /// Decode `data` as the recorded word list
    ///
    /// A backend with no words sends `null`, which decodes to an empty list.
    pub fn words(&self) -> Result<Vec<String>, ApiError> {
        match &self.data {
            None => Ok(Vec::new()),
            Some(data) => Ok(serde_json::from_value(data.clone())?),
        }
    }

    /// Decode `data` as a word entry
    pub fn entry(&self) -> Result<WordEntry, ApiError> {
        let data = self.data.as_ref().ok_or(ApiError::MissingData)?;
        Ok(serde_json::from_value(data.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_and_data_are_copied() {
        let result = ApiResult::from_body(true, br#"{"msg":"saved","data":null}"#).unwrap();
        assert_eq!(
            result,
            ApiResult {
                success: true,
                data: None,
                msg: Some("saved".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_body_is_an_empty_envelope() {
        let result = ApiResult::from_body(true, b"").unwrap();
        assert!(result.success);
        assert_eq!(result.msg, None);
        assert_eq!(result.data, None);
    }

    #[test]
    fn test_empty_message_is_absent() {
        let result = ApiResult::from_body(true, br#"{"msg":"","data":["a"]}"#).unwrap();
        assert_eq!(result.msg, None);
        assert_eq!(result.words().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(matches!(
            ApiResult::from_body(true, b"<html>oops</html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_null_word_list_is_empty() {
        let result = ApiResult::from_body(true, br#"{"msg":"","data":null}"#).unwrap();
        assert_eq!(result.words().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_entry_requires_data() {
        let result = ApiResult::from_body(true, br#"{"msg":"ok"}"#).unwrap();
        assert!(matches!(result.entry(), Err(ApiError::MissingData)));

        let result = ApiResult {
            success: true,
            data: Some(json!({"word": "terse", "mastered": true})),
            msg: None,
        };
        let entry = result.entry().unwrap();
        assert_eq!(entry.word, "terse");
        assert!(entry.mastered);
    }

    #[test]
    fn test_serialized_shape_omits_absent_fields() {
        let value = serde_json::to_value(ApiResult::failure("boom")).unwrap();
        assert_eq!(value, json!({"success": false, "msg": "boom"}));
    }
}
