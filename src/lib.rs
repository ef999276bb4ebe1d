//! # wordcard
//!
//! Front-end core for a vocabulary flashcard service.
//!
//! A passage pasted by the user is turned into selectable words by the
//! [tokenizer](crate::tokenizer). Selecting a word records it, together with the
//! passage it came from, through the [api](crate::api) client. The
//! [session](crate::session) module owns all front-end state and exposes it as an
//! explicit event interface, so any renderer (the bundled terminal UI, tests)
//! can drive it.
//!
//! ## Layout
//!
//! - [`tokenizer`]: context rebuilding and word normalization
//! - [`api`]: REST operations against the word backend
//! - [`model`]: records and word entries exchanged with the backend
//! - [`session`]: state + events for the interactive front-end
//! - [`config`]: layered configuration

pub mod api;
pub mod config;
pub mod model;
pub mod session;
pub mod tokenizer;

pub use api::{ApiClient, ApiError, ApiResult, Operation};
pub use model::{Record, WordEntry};
pub use tokenizer::{normalize_word, tokenize, Token, Tokenized};
