//! Error types

use thiserror::Error;

/// Core error types
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid price {price} for outcome {outcome}")]
    InvalidPrice { outcome: String, price: f64 },

    #[error("Invalid total stake: {0}")]
    InvalidStake(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Odds feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("API key missing; set ODDS_API_KEY or api.api_key")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result type aliases
pub type CoreResult<T> = Result<T, CoreError>;
pub type FeedResult<T> = Result<T, FeedError>;
