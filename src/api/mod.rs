pub mod http;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::model::sport_event::SportEvent;

/// Failures from the backend, terminal for the single operation that hit them.
/// Callers surface a fixed user-facing message and never retry.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),
}

#[async_trait]
pub trait SportsApi: Send + Sync {
    /// Relay one user message and return the assistant's reply text
    /// (Markdown-capable).
    async fn chat(&self, message: &str) -> Result<String>;

    /// Fetch the event list for a sport filter (`all`, `football`, ...).
    /// The server may return an empty array.
    async fn events(&self, filter: &str) -> Result<Vec<SportEvent>>;
}
