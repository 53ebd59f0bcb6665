//! Best-price aggregation across bookmakers

use oddsarb_core::{MarketSnapshot, Quote};

/// Reduce the quotes for one (event, market) pair to the best price per
/// outcome.
///
/// Pure function of the input sequence: an empty input yields an empty
/// snapshot, a better price replaces the recorded one only on strict
/// improvement, and exact ties keep the first bookmaker seen. Quotes are
/// assumed pre-validated (finite, price > 1.0); this function performs no
/// validation of its own.
pub fn aggregate(quotes: &[Quote]) -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::new();
    for quote in quotes {
        snapshot.observe(quote);
    }
    snapshot
}
