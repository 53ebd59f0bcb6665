//! Quote and market snapshot types

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A single priced outcome offered by one bookmaker
///
/// Prices use the decimal odds convention: stake x price = total payout
/// including the stake, so a valid price is always strictly above 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub outcome: String,
    pub price: f64,
    pub bookmaker: String,
    pub bookmaker_key: String,
}

impl Quote {
    pub fn new(
        outcome: impl Into<String>,
        price: f64,
        bookmaker: impl Into<String>,
        bookmaker_key: impl Into<String>,
    ) -> Self {
        Self {
            outcome: outcome.into(),
            price,
            bookmaker: bookmaker.into(),
            bookmaker_key: bookmaker_key.into(),
        }
    }

    /// Boundary pre-check; quotes failing it must not reach aggregation
    pub fn validate(&self) -> CoreResult<()> {
        if is_valid_price(self.price) {
            Ok(())
        } else {
            Err(CoreError::InvalidPrice {
                outcome: self.outcome.clone(),
                price: self.price,
            })
        }
    }
}

/// Pre-validation for decimal odds
///
/// Quotes failing this check must be dropped at the retrieval boundary
/// before aggregation; the aggregator itself performs no validation.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 1.0
}

/// Best price observed for one outcome, with the bookmaker that offered it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPriceEntry {
    pub outcome: String,
    pub price: f64,
    pub bookmaker: String,
    pub bookmaker_key: String,
}

/// Per-outcome best prices for one market of one event
///
/// Entries are kept in first-seen order, with at most one entry per
/// outcome name. An outcome quoted by zero bookmakers is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    entries: Vec<BestPriceEntry>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quote, replacing the current best only on strict improvement.
    /// Exact ties keep the first-seen bookmaker.
    pub fn observe(&mut self, quote: &Quote) {
        match self.entries.iter_mut().find(|e| e.outcome == quote.outcome) {
            Some(entry) => {
                if quote.price > entry.price {
                    entry.price = quote.price;
                    entry.bookmaker = quote.bookmaker.clone();
                    entry.bookmaker_key = quote.bookmaker_key.clone();
                }
            }
            None => self.entries.push(BestPriceEntry {
                outcome: quote.outcome.clone(),
                price: quote.price,
                bookmaker: quote.bookmaker.clone(),
                bookmaker_key: quote.bookmaker_key.clone(),
            }),
        }
    }

    pub fn get(&self, outcome: &str) -> Option<&BestPriceEntry> {
        self.entries.iter().find(|e| e.outcome == outcome)
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[BestPriceEntry] {
        &self.entries
    }

    pub fn outcome_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of reciprocals of the best prices, the book's combined
    /// implied probability with bookmaker-shopping applied
    pub fn arbitrage_index(&self) -> f64 {
        self.entries.iter().map(|e| 1.0 / e.price).sum()
    }
}
