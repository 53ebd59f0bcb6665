//! Core types and utilities for the odds arbitrage bot
//!
//! This crate provides shared types used across all components:
//! - Quote, best-price and market snapshot types
//! - Arbitrage opportunity types
//! - Sport/market/region catalog
//! - Run configuration

pub mod catalog;
pub mod config;
pub mod errors;
pub mod opportunities;
pub mod quotes;

pub use catalog::*;
pub use config::*;
pub use errors::*;
pub use opportunities::*;
pub use quotes::*;
