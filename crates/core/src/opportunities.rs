//! Arbitrage opportunity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive context of the event an opportunity belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub sport_key: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
}

/// One outcome's stake/price/bookmaker triple within an opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityLeg {
    pub outcome: String,
    pub price: f64,
    pub bookmaker: String,
    pub bookmaker_key: String,
    pub stake: f64,
}

impl OpportunityLeg {
    /// Total payout (stake included) if this leg wins
    pub fn payout(&self) -> f64 {
        self.stake * self.price
    }
}

/// Detected arbitrage opportunity
///
/// Terminal report record: created only when the arbitrage index is below
/// 1.0 and the margin clears the configured minimum, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    pub event_id: String,
    pub sport_key: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    pub market_key: String,

    pub legs: Vec<OpportunityLeg>,

    /// Sum of reciprocals of the best prices, < 1.0 by construction
    pub arbitrage_index: f64,
    /// Guaranteed percentage return on the total stake
    pub profit_margin_pct: f64,
    /// Guaranteed profit in currency units, from the first leg's payout
    pub guaranteed_profit: f64,
    pub total_stake: f64,
}

impl ArbitrageOpportunity {
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Sum of the rounded per-leg stakes; may differ from `total_stake`
    /// by a rounding artifact
    pub fn staked_total(&self) -> f64 {
        self.legs.iter().map(|l| l.stake).sum()
    }

    /// Largest payout difference between any two legs. Anything beyond
    /// one rounding unit per priced leg indicates a computation bug.
    pub fn payout_spread(&self) -> f64 {
        let payouts: Vec<f64> = self.legs.iter().map(OpportunityLeg::payout).collect();
        let max = payouts.iter().cloned().fold(f64::MIN, f64::max);
        let min = payouts.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(outcome: &str, price: f64, stake: f64) -> OpportunityLeg {
        OpportunityLeg {
            outcome: outcome.to_string(),
            price,
            bookmaker: "BetCo".to_string(),
            bookmaker_key: "betco".to_string(),
            stake,
        }
    }

    #[test]
    fn test_leg_payout() {
        assert!((leg("Home", 2.1, 49.40).payout() - 103.74).abs() < 1e-9);
    }

    #[test]
    fn test_staked_total_and_spread() {
        let opp = ArbitrageOpportunity {
            event_id: "evt1".to_string(),
            sport_key: "soccer_epl".to_string(),
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            commence_time: Utc::now(),
            market_key: "h2h".to_string(),
            legs: vec![leg("Home", 2.10, 49.40), leg("Away", 2.05, 50.60)],
            arbitrage_index: 0.964,
            profit_margin_pct: 3.60,
            guaranteed_profit: 3.74,
            total_stake: 100.0,
        };

        assert!((opp.staked_total() - 100.0).abs() < 1e-9);
        assert!(opp.payout_spread() <= 0.01 + 1e-9);
    }
}
