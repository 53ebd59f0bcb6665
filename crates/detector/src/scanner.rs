//! Event scanning

use rayon::prelude::*;
use tracing::{debug, warn};

use oddsarb_core::{ArbitrageOpportunity, Quote, StakeConfig};
use oddsarb_feed::OddsEvent;

use crate::aggregator::aggregate;
use crate::evaluator::evaluate_with_reason;

/// Scans retrieved events for arbitrage opportunities
///
/// Stateless between calls; each event is analyzed independently, so the
/// fan-out across events is embarrassingly parallel.
pub struct ArbitrageScanner {
    stake: StakeConfig,
    parallel: bool,
}

impl ArbitrageScanner {
    pub fn new(stake: StakeConfig) -> Self {
        Self {
            stake,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Analyze every market of a single event
    pub fn scan_event(&self, event: &OddsEvent) -> Vec<ArbitrageOpportunity> {
        let info = event.info();
        let mut opportunities = Vec::new();

        for (market_key, quotes) in market_quotes(event) {
            let snapshot = aggregate(&quotes);
            match evaluate_with_reason(&info, &market_key, &snapshot, &self.stake) {
                Ok(opportunity) => {
                    debug!(
                        "Opportunity: {} vs {} [{}] margin={:.2}% profit={:.2}",
                        info.home_team,
                        info.away_team,
                        market_key,
                        opportunity.profit_margin_pct,
                        opportunity.guaranteed_profit
                    );
                    opportunities.push(opportunity);
                }
                Err(reason) => {
                    debug!(
                        "No opportunity for {} [{}]: {:?}",
                        info.id, market_key, reason
                    );
                }
            }
        }

        opportunities
    }

    /// Analyze a batch of events, in parallel when configured
    pub fn scan_events(&self, events: &[OddsEvent]) -> Vec<ArbitrageOpportunity> {
        if self.parallel {
            events
                .par_iter()
                .flat_map(|event| self.scan_event(event))
                .collect()
        } else {
            events
                .iter()
                .flat_map(|event| self.scan_event(event))
                .collect()
        }
    }
}

/// Group an event's raw outcomes into per-market quote lists.
///
/// This is the retrieval/core boundary: quotes with non-finite prices or
/// prices at or below 1.0 are dropped here so they never reach
/// aggregation. Market order follows first appearance in the payload.
fn market_quotes(event: &OddsEvent) -> Vec<(String, Vec<Quote>)> {
    let mut markets: Vec<(String, Vec<Quote>)> = Vec::new();

    for bookmaker in &event.bookmakers {
        for market in &bookmaker.markets {
            for outcome in &market.outcomes {
                let quote = Quote::new(
                    outcome.name.clone(),
                    outcome.price,
                    bookmaker.title.clone(),
                    bookmaker.key.clone(),
                );

                if let Err(e) = quote.validate() {
                    warn!("Dropping quote from {} (event {}): {}", bookmaker.key, event.id, e);
                    continue;
                }

                match markets.iter_mut().find(|(key, _)| *key == market.key) {
                    Some((_, quotes)) => quotes.push(quote),
                    None => markets.push((market.key.clone(), vec![quote])),
                }
            }
        }
    }

    markets
}
