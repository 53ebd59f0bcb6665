//! Plain-text rendering of scan and backtest results

use std::fmt::Write;

use oddsarb_core::{catalog, ArbitrageOpportunity};
use oddsarb_detector::BacktestSummary;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Render a batch of opportunities as a report
pub fn format_opportunities(opportunities: &[ArbitrageOpportunity]) -> String {
    if opportunities.is_empty() {
        return "No arbitrage opportunities found.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "ARBITRAGE OPPORTUNITIES FOUND: {}",
        opportunities.len()
    );
    let _ = writeln!(out, "{RULE}");

    for (i, opportunity) in opportunities.iter().enumerate() {
        out.push_str(&format_opportunity(i + 1, opportunity));
        let _ = writeln!(out, "{RULE}");
    }

    out
}

/// Render one opportunity with its betting strategy
pub fn format_opportunity(number: usize, opp: &ArbitrageOpportunity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OPPORTUNITY #{number}");
    let _ = writeln!(out, "Event: {} vs {}", opp.home_team, opp.away_team);
    let _ = writeln!(out, "Sport: {}", catalog::sport_label(&opp.sport_key));
    let _ = writeln!(out, "Market: {}", catalog::market_label(&opp.market_key));
    let _ = writeln!(
        out,
        "Commence Time: {}",
        opp.commence_time.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Arbitrage Index: {:.4}", opp.arbitrage_index);
    let _ = writeln!(out, "Profit Margin: {:.2}%", opp.profit_margin_pct);
    let _ = writeln!(out, "Guaranteed Profit: ${:.2}", opp.guaranteed_profit);
    let _ = writeln!(out, "Total Stake: ${:.2}", opp.total_stake);
    let _ = writeln!(out, "Betting strategy:");

    for leg in &opp.legs {
        let _ = writeln!(
            out,
            "  Bet ${:.2} on {} @ {:.4} ({})",
            leg.stake, leg.outcome, leg.price, leg.bookmaker
        );
    }

    out
}

/// Render a backtest summary
pub fn format_backtest_summary(summary: &BacktestSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "BACKTESTING SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Dates Checked: {}", summary.dates_checked);
    let _ = writeln!(
        out,
        "Dates with Opportunities: {}",
        summary.dates_with_opportunities
    );
    let _ = writeln!(
        out,
        "Total Opportunities Found: {}",
        summary.total_opportunities
    );
    let _ = writeln!(out, "Total Potential Profit: ${:.2}", summary.total_profit);

    if summary.dates_checked > 0 {
        let _ = writeln!(
            out,
            "Average Opportunities per Date: {:.2}",
            summary.average_opportunities_per_date()
        );
        let _ = writeln!(
            out,
            "Average Profit per Date: ${:.2}",
            summary.average_profit_per_date()
        );
        let _ = writeln!(out, "Hit Rate: {:.1}%", summary.hit_rate_pct());
    }

    if let Some(best) = &summary.best_opportunity {
        let _ = writeln!(out, "Best Opportunity:");
        let _ = writeln!(out, "  Event: {} vs {}", best.home_team, best.away_team);
        let _ = writeln!(out, "  Profit Margin: {:.2}%", best.profit_margin_pct);
        let _ = writeln!(out, "  Guaranteed Profit: ${:.2}", best.guaranteed_profit);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use oddsarb_core::OpportunityLeg;

    fn sample_opportunity() -> ArbitrageOpportunity {
        ArbitrageOpportunity {
            event_id: "evt1".to_string(),
            sport_key: "soccer_epl".to_string(),
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            commence_time: "2024-01-15T20:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            market_key: "h2h".to_string(),
            legs: vec![
                OpportunityLeg {
                    outcome: "Arsenal".to_string(),
                    price: 2.10,
                    bookmaker: "BetCo".to_string(),
                    bookmaker_key: "betco".to_string(),
                    stake: 49.40,
                },
                OpportunityLeg {
                    outcome: "Chelsea".to_string(),
                    price: 2.05,
                    bookmaker: "OddsInc".to_string(),
                    bookmaker_key: "oddsinc".to_string(),
                    stake: 50.60,
                },
            ],
            arbitrage_index: 0.964,
            profit_margin_pct: 3.6,
            guaranteed_profit: 3.74,
            total_stake: 100.0,
        }
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(
            format_opportunities(&[]),
            "No arbitrage opportunities found."
        );
    }

    #[test]
    fn test_opportunity_report_contents() {
        let report = format_opportunities(&[sample_opportunity()]);
        assert!(report.contains("ARBITRAGE OPPORTUNITIES FOUND: 1"));
        assert!(report.contains("Event: Arsenal vs Chelsea"));
        assert!(report.contains("Sport: English Premier League"));
        assert!(report.contains("Market: Head to Head (Moneyline)"));
        assert!(report.contains("Profit Margin: 3.60%"));
        assert!(report.contains("Bet $49.40 on Arsenal @ 2.1000 (BetCo)"));
        assert!(report.contains("Bet $50.60 on Chelsea @ 2.0500 (OddsInc)"));
    }

    #[test]
    fn test_backtest_summary_report() {
        let mut summary = BacktestSummary::new();
        summary.record(
            "2024-01-15T00:00:00Z".parse().unwrap(),
            vec![sample_opportunity()],
        );

        let report = format_backtest_summary(&summary);
        assert!(report.contains("Dates Checked: 1"));
        assert!(report.contains("Total Potential Profit: $3.74"));
        assert!(report.contains("Hit Rate: 100.0%"));
        assert!(report.contains("Event: Arsenal vs Chelsea"));
    }
}
