//! Arbitrage detection engine
//!
//! Features:
//! - Per-outcome best-price aggregation across bookmakers
//! - Arbitrage index evaluation with equal-profit stake allocation
//! - Parallel event scanning with rayon
//! - Backtest summarization over historical snapshots

pub mod aggregator;
pub mod backtest;
pub mod evaluator;
pub mod scanner;

pub use aggregator::aggregate;
pub use backtest::{BacktestSummary, DateResult};
pub use evaluator::{evaluate, evaluate_with_reason, RejectReason};
pub use scanner::ArbitrageScanner;
