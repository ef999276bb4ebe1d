//! REST access to the word backend
//!
//! [`Operation`] names what to do, [`ApiClient::call`] does it and always comes back
//! with an [`ApiResult`]. The only errors surfaced as `Err` are the ones that happen
//! before any request can be made (bad base URL) or when decoding `data` into a
//! typed value.
//!
//! | Operation     | Method | Path                |
//! |---------------|--------|---------------------|
//! | RecordWord    | POST   | /word               |
//! | ListWords     | GET    | /word               |
//! | DeleteWord    | DELETE | /word?word=`<w>`    |
//! | GetDefinition | GET    | /define?word=`<w>`  |
//! | SetMastered   | PUT    | /master?word=`<w>`  |

pub mod client;
pub mod operation;
pub mod result;

pub use client::ApiClient;
pub use operation::Operation;
pub use result::ApiResult;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response carried no data")]
    MissingData,
}
