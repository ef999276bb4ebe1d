//! HTTP client for the word backend
//!
//! One call, one request. There are no retries, no timeouts and no caching; calls
//! made concurrently race and the caller decides what to do with whichever answer
//! arrives last.

use super::{ApiError, ApiResult, Operation};
use crate::model::Record;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::error::Error as StdError;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client rooted at `base_url`
    ///
    /// A path in the base URL is kept as a prefix: `http://host/app` resolves
    /// `/word` to `http://host/app/word`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut root = base_url.trim().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }

        let parsed = Url::parse(&root).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("wordcard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(ApiClient {
            base_url: parsed,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL an operation is sent to, query included
    pub fn url_for(&self, operation: &Operation) -> Result<Url, ApiError> {
        let path = operation.path().trim_start_matches('/');
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(word) = operation.word() {
            url.query_pairs_mut().append_pair("word", word);
        }

        Ok(url)
    }

    /// Perform an operation
    ///
    /// Never fails: every error is folded into an unsuccessful [`ApiResult`].
    pub async fn call(&self, operation: &Operation) -> ApiResult {
        match self.send(operation).await {
            Ok(result) => {
                if !result.success {
                    warn!(
                        operation = operation.name(),
                        msg = result.message().unwrap_or_default(),
                        "backend rejected request"
                    );
                }
                result
            }
            Err(err) => {
                let diagnostic = diagnostic(&err);
                warn!(operation = operation.name(), error = %diagnostic, "request failed");
                ApiResult::failure(diagnostic)
            }
        }
    }

    async fn send(&self, operation: &Operation) -> Result<ApiResult, ApiError> {
        let url = self.url_for(operation)?;
        debug!(operation = operation.name(), method = %operation.method(), %url, "sending request");

        let mut request = self
            .http_client
            .request(operation.method(), url)
            .header(ACCEPT, "application/json");
        if let Some(record) = operation.body() {
            request = request.json(record);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;
        debug!(operation = operation.name(), %status, bytes = body.len(), "response received");

        let mut result = ApiResult::from_body(status.is_success(), &body)?;
        if !result.success && result.msg.is_none() {
            result.msg = Some(format!("request failed with status {}", status));
        }
        Ok(result)
    }

    pub async fn record_word(&self, record: Record) -> ApiResult {
        self.call(&Operation::RecordWord(record)).await
    }

    pub async fn list_words(&self) -> ApiResult {
        self.call(&Operation::ListWords).await
    }

    pub async fn delete_word(&self, word: &str) -> ApiResult {
        self.call(&Operation::DeleteWord(word.to_string())).await
    }

    pub async fn get_definition(&self, word: &str) -> ApiResult {
        self.call(&Operation::GetDefinition(word.to_string())).await
    }

    pub async fn set_mastered(&self, word: &str) -> ApiResult {
        self.call(&Operation::SetMastered(word.to_string())).await
    }
}

/// Error message with its whole source chain, e.g.
/// "request failed: error sending request: connection refused"
fn diagnostic(err: &ApiError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
