//! Lintra LLM collaborator - external suggestion service client.
//!
//! Wraps the LLM-backed code review service behind the
//! [`SuggestionProvider`] trait. The core engine only sees the narrow
//! [`lintra_core::RawSuggestion`] merge contract; this crate handles the
//! wire format, credentials, timeouts, and graceful degradation.

pub mod client;
pub mod config;
pub mod error;

pub use client::{SuggestionClient, SuggestionProvider};
pub use config::LlmConfig;
pub use error::{Error, Result};
