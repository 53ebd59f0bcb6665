//! Configuration types

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, Region};

/// The Odds API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Falls back to the ODDS_API_KEY environment variable when empty
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_delay_secs: u64,
    /// Warn once remaining quota drops below this
    pub min_requests_remaining: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.the-odds-api.com".to_string(),
            request_timeout_secs: 30,
            max_retries: 3,
            retry_delay_secs: 5,
            min_requests_remaining: 10,
        }
    }
}

/// What to scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub sports: Vec<String>,
    pub regions: Vec<Region>,
    pub markets: Vec<String>,
    /// Fan event analysis out across a thread pool
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sports: vec!["soccer_epl".to_string()],
            regions: vec![Region::Us, Region::Uk, Region::Eu],
            markets: vec!["h2h".to_string()],
            parallel: true,
        }
    }
}

/// Stake sizing and reporting threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StakeConfig {
    /// Total amount split across the legs of each opportunity
    pub total_stake: f64,
    /// Significance filter: valid arbitrage below this margin is not reported
    pub min_profit_margin_pct: f64,
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            total_stake: 100.0,
            min_profit_margin_pct: 0.5,
        }
    }
}

impl StakeConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.total_stake.is_finite() || self.total_stake <= 0.0 {
            return Err(CoreError::InvalidStake(self.total_stake));
        }
        if !self.min_profit_margin_pct.is_finite() || self.min_profit_margin_pct < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "min_profit_margin_pct must be non-negative, got {}",
                self.min_profit_margin_pct
            )));
        }
        Ok(())
    }
}

/// Historical replay over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// ISO-8601 timestamps, e.g. 2024-01-15T00:00:00Z
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u32,
}

fn default_interval_hours() -> u32 {
    24
}

/// Complete bot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub api: ApiConfig,
    pub scan: ScanConfig,
    pub stake: StakeConfig,
    /// When present the bot replays history instead of scanning live odds
    pub backtest: Option<BacktestConfig>,
}
