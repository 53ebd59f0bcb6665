//! Arbitrage evaluation and stake allocation

use tracing::warn;

use oddsarb_core::{
    ArbitrageOpportunity, EventInfo, MarketSnapshot, OpportunityLeg, StakeConfig,
};

/// Why a snapshot produced no opportunity
///
/// All three are expected, common, non-exceptional outcomes; callers that
/// only care about presence should use [`evaluate`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Arbitrage across fewer than two outcomes is undefined
    InsufficientOutcomes { outcomes: usize },
    /// Combined implied probability at or above 1.0, no risk-free split exists
    NoArbitrage { index: f64 },
    /// Mathematically valid arbitrage filtered as too marginal to report
    BelowThreshold { margin_pct: f64, min_pct: f64 },
}

/// Round to currency-minor-unit precision
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate a market snapshot for a risk-free stake split.
///
/// Returns the opportunity record, or the reason none was produced. The
/// guaranteed profit is computed from the first leg's rounded payout; the
/// unrounded payouts of all legs are identical by construction
/// (`total_stake / index`) and are checked rather than trusted.
pub fn evaluate_with_reason(
    event: &EventInfo,
    market_key: &str,
    snapshot: &MarketSnapshot,
    stake: &StakeConfig,
) -> Result<ArbitrageOpportunity, RejectReason> {
    let outcomes = snapshot.outcome_count();
    if outcomes < 2 {
        return Err(RejectReason::InsufficientOutcomes { outcomes });
    }

    // No epsilon here: display rounding must not alter the decision.
    let index = snapshot.arbitrage_index();
    if index >= 1.0 {
        return Err(RejectReason::NoArbitrage { index });
    }

    let margin_pct = (1.0 - index) * 100.0;
    if margin_pct < stake.min_profit_margin_pct {
        return Err(RejectReason::BelowThreshold {
            margin_pct,
            min_pct: stake.min_profit_margin_pct,
        });
    }

    // Equal-payout allocation: every unrounded leg payout is exactly this.
    let equal_payout = stake.total_stake / index;

    let legs: Vec<OpportunityLeg> = snapshot
        .entries()
        .iter()
        .map(|entry| {
            let exact = equal_payout / entry.price;
            debug_assert!(
                (exact * entry.price - equal_payout).abs() < 1e-6,
                "unrounded payouts diverged for {}",
                entry.outcome
            );
            OpportunityLeg {
                outcome: entry.outcome.clone(),
                price: entry.price,
                bookmaker: entry.bookmaker.clone(),
                bookmaker_key: entry.bookmaker_key.clone(),
                stake: round2(exact),
            }
        })
        .collect();

    let guaranteed_profit = round2(legs[0].payout() - stake.total_stake);

    let opportunity = ArbitrageOpportunity {
        event_id: event.id.clone(),
        sport_key: event.sport_key.clone(),
        home_team: event.home_team.clone(),
        away_team: event.away_team.clone(),
        commence_time: event.commence_time,
        market_key: market_key.to_string(),
        legs,
        arbitrage_index: index,
        profit_margin_pct: margin_pct,
        guaranteed_profit,
        total_stake: stake.total_stake,
    };

    check_payout_spread(&opportunity);
    Ok(opportunity)
}

/// Presence-only form of [`evaluate_with_reason`]
pub fn evaluate(
    event: &EventInfo,
    market_key: &str,
    snapshot: &MarketSnapshot,
    stake: &StakeConfig,
) -> Option<ArbitrageOpportunity> {
    evaluate_with_reason(event, market_key, snapshot, stake).ok()
}

/// Independently rounding each rounded stake moves its payout by at most
/// half a cent times the leg price, so any two legs may legitimately
/// differ by up to `0.005 * (price_a + price_b)`. More than that means
/// the stake computation itself is wrong.
fn check_payout_spread(opportunity: &ArbitrageOpportunity) {
    let mut max = (f64::MIN, 0.0);
    let mut min = (f64::MAX, 0.0);
    for leg in &opportunity.legs {
        let payout = leg.payout();
        if payout > max.0 {
            max = (payout, leg.price);
        }
        if payout < min.0 {
            min = (payout, leg.price);
        }
    }

    let spread = max.0 - min.0;
    let allowed = 0.005 * (max.1 + min.1) + 1e-9;
    if spread > allowed {
        warn!(
            "Payout spread {:.4} exceeds rounding bound {:.4} for event {} market {}",
            spread, allowed, opportunity.event_id, opportunity.market_key
        );
        debug_assert!(false, "payout spread beyond rounding bound");
    }
}
