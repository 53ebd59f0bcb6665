//! Backtest summarization over historical snapshots
//!
//! The core stays a point-in-time computation; backtesting is nothing more
//! than repeated invocation over a sequence of snapshots with this
//! accumulator on top.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use oddsarb_core::ArbitrageOpportunity;

/// Scan results for one snapshot date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateResult {
    pub date: DateTime<Utc>,
    pub opportunity_count: usize,
    pub total_profit: f64,
    pub opportunities: Vec<ArbitrageOpportunity>,
}

/// Accumulated backtest results over a date range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    pub dates_checked: usize,
    pub dates_with_opportunities: usize,
    pub total_opportunities: usize,
    pub total_profit: f64,
    pub best_opportunity: Option<ArbitrageOpportunity>,
    pub daily_results: Vec<DateResult>,
}

impl BacktestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one snapshot's scan results into the summary
    pub fn record(&mut self, date: DateTime<Utc>, opportunities: Vec<ArbitrageOpportunity>) {
        let daily_profit: f64 = opportunities.iter().map(|o| o.guaranteed_profit).sum();

        self.dates_checked += 1;
        self.total_opportunities += opportunities.len();
        self.total_profit += daily_profit;

        if !opportunities.is_empty() {
            self.dates_with_opportunities += 1;

            // Track the best opportunity by profit margin
            for opportunity in &opportunities {
                let improves = self
                    .best_opportunity
                    .as_ref()
                    .map(|best| opportunity.profit_margin_pct > best.profit_margin_pct)
                    .unwrap_or(true);
                if improves {
                    self.best_opportunity = Some(opportunity.clone());
                }
            }
        }

        self.daily_results.push(DateResult {
            date,
            opportunity_count: opportunities.len(),
            total_profit: daily_profit,
            opportunities,
        });
    }

    pub fn average_opportunities_per_date(&self) -> f64 {
        if self.dates_checked == 0 {
            return 0.0;
        }
        self.total_opportunities as f64 / self.dates_checked as f64
    }

    pub fn average_profit_per_date(&self) -> f64 {
        if self.dates_checked == 0 {
            return 0.0;
        }
        self.total_profit / self.dates_checked as f64
    }

    /// Share of checked dates with at least one opportunity, in percent
    pub fn hit_rate_pct(&self) -> f64 {
        if self.dates_checked == 0 {
            return 0.0;
        }
        self.dates_with_opportunities as f64 / self.dates_checked as f64 * 100.0
    }
}
