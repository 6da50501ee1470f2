//! MediaWiki action API transport: endpoints, wire types, and response extraction.

pub mod client;
mod extract;
pub mod types;

pub use client::{Endpoints, WikiApi, WikipediaClient};

/// Errors from a single Wikipedia API call.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Wikipedia API returned status {0}")]
    Status(u16),

    #[error("Unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Wikipedia API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
