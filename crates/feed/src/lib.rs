//! The Odds API client
//!
//! Features:
//! - Live and historical odds retrieval
//! - Bounded retry with rate-limit (429) backoff
//! - Request quota tracking from response headers

pub mod client;
pub mod models;

pub use client::OddsApiClient;
pub use models::{Bookmaker, BookmakerMarket, HistoricalSnapshot, MarketOutcome, OddsEvent, SportInfo};
