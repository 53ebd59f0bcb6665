//! Odds arbitrage bot entry point

mod display;

use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use futures::future::join_all;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use oddsarb_core::{catalog, BacktestConfig, BotConfig};
use oddsarb_detector::{ArbitrageScanner, BacktestSummary};
use oddsarb_feed::OddsApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting odds arbitrage bot v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    config.stake.validate().context("invalid stake configuration")?;

    info!(
        "Configuration: sports={:?} regions={:?} markets={:?} stake=${} min_margin={}%",
        config.scan.sports,
        config.scan.regions,
        config.scan.markets,
        config.stake.total_stake,
        config.stake.min_profit_margin_pct
    );

    let client = OddsApiClient::new(config.api.clone())
        .context("failed to build odds client; get a key at https://the-odds-api.com/")?;

    match &config.backtest {
        Some(backtest) => run_backtest(&client, &config, backtest).await?,
        None => run_live_scan(&client, &config).await?,
    }

    if let Some(remaining) = client.quota().remaining {
        info!("API usage: {} requests remaining", remaining);
    }

    Ok(())
}

/// Layered configuration: optional oddsarb.toml, overridable via
/// ODDSARB_* environment variables (double underscore as separator,
/// e.g. ODDSARB_STAKE__TOTAL_STAKE=250)
fn load_config() -> anyhow::Result<BotConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("oddsarb").required(false))
        .add_source(config::Environment::with_prefix("ODDSARB").separator("__"))
        .build()
        .context("failed to load configuration")?;

    settings
        .try_deserialize::<BotConfig>()
        .context("invalid configuration")
}

async fn run_live_scan(client: &OddsApiClient, config: &BotConfig) -> anyhow::Result<()> {
    let scanner = ArbitrageScanner::new(config.stake).with_parallel(config.scan.parallel);

    let fetches = config.scan.sports.iter().map(|sport| {
        client.get_odds(sport, &config.scan.regions, &config.scan.markets)
    });
    let results = join_all(fetches).await;

    let mut opportunities = Vec::new();
    for (sport, result) in config.scan.sports.iter().zip(results) {
        match result {
            Ok(events) => {
                info!("Found {} events for {}", events.len(), catalog::sport_label(sport));
                opportunities.extend(scanner.scan_events(&events));
            }
            Err(e) => error!("Failed to fetch odds for {}: {}", sport, e),
        }
    }

    println!("{}", display::format_opportunities(&opportunities));
    Ok(())
}

async fn run_backtest(
    client: &OddsApiClient,
    config: &BotConfig,
    backtest: &BacktestConfig,
) -> anyhow::Result<()> {
    let start = parse_date(&backtest.start_date)
        .with_context(|| format!("invalid start_date: {}", backtest.start_date))?;
    let end = parse_date(&backtest.end_date)
        .with_context(|| format!("invalid end_date: {}", backtest.end_date))?;
    anyhow::ensure!(start <= end, "start_date must not be after end_date");

    let step = Duration::hours(i64::from(backtest.interval_hours.max(1)));
    info!("Backtesting from {} to {} every {}h", start, end, backtest.interval_hours);
    warn!("Historical endpoints consume more API requests");

    let scanner = ArbitrageScanner::new(config.stake).with_parallel(config.scan.parallel);
    let mut summary = BacktestSummary::new();

    let mut current = start;
    while current <= end {
        // Historical snapshots are fetched sequentially to go easy on quota
        for sport in &config.scan.sports {
            match client
                .get_historical_odds(sport, &config.scan.regions, &config.scan.markets, current)
                .await
            {
                Ok(snapshot) => {
                    let found = scanner.scan_events(&snapshot.data);
                    info!(
                        "{} {}: {} events, {} opportunities",
                        current,
                        sport,
                        snapshot.data.len(),
                        found.len()
                    );
                    summary.record(current, found);
                }
                Err(e) => error!("Failed to fetch history for {} at {}: {}", sport, current, e),
            }
        }
        current = current + step;
    }

    println!("{}", display::format_backtest_summary(&summary));
    Ok(())
}

/// Accept a few common timestamp spellings, date-only meaning midnight UTC
fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = input.parse::<DateTime<Utc>>() {
        return Some(date_time);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15 00:00:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
    }
}
