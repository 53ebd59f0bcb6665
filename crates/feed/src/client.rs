//! HTTP client for The Odds API

use std::env;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use oddsarb_core::{regions_param, ApiConfig, FeedError, FeedResult, Region};

use crate::models::{HistoricalSnapshot, OddsEvent, SportInfo};

const REMAINING_HEADER: &str = "x-requests-remaining";
const USED_HEADER: &str = "x-requests-used";

/// API request quota as reported by the last response
#[derive(Debug, Clone, Copy, Default)]
pub struct Quota {
    pub remaining: Option<u64>,
    pub used: Option<u64>,
}

/// Client for The Odds API with retry and quota tracking
pub struct OddsApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    api_key: String,
    quota: RwLock<Quota>,
}

impl OddsApiClient {
    pub fn new(config: ApiConfig) -> FeedResult<Self> {
        let api_key = if config.api_key.is_empty() {
            env::var("ODDS_API_KEY").unwrap_or_default()
        } else {
            config.api_key.clone()
        };

        if api_key.is_empty() {
            return Err(FeedError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        Ok(Self {
            http,
            config,
            api_key,
            quota: RwLock::new(Quota::default()),
        })
    }

    /// Quota reported by the most recent response
    pub fn quota(&self) -> Quota {
        *self.quota.read()
    }

    /// List available sports
    pub async fn get_sports(&self) -> FeedResult<Vec<SportInfo>> {
        self.get_json("/v4/sports", &[]).await
    }

    /// Live odds for one sport across the given regions and markets
    pub async fn get_odds(
        &self,
        sport: &str,
        regions: &[Region],
        markets: &[String],
    ) -> FeedResult<Vec<OddsEvent>> {
        let path = format!("/v4/sports/{sport}/odds");
        self.get_json(&path, &Self::odds_params(regions, markets, None))
            .await
    }

    /// Historical odds snapshot closest to the given timestamp
    ///
    /// Historical requests cost more quota than live ones.
    pub async fn get_historical_odds(
        &self,
        sport: &str,
        regions: &[Region],
        markets: &[String],
        date: DateTime<Utc>,
    ) -> FeedResult<HistoricalSnapshot> {
        let path = format!("/v4/historical/sports/{sport}/odds");
        self.get_json(&path, &Self::odds_params(regions, markets, Some(date)))
            .await
    }

    fn odds_params(
        regions: &[Region],
        markets: &[String],
        date: Option<DateTime<Utc>>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("regions", regions_param(regions)),
            ("markets", markets.join(",")),
            ("oddsFormat", "decimal".to_string()),
            ("dateFormat", "iso".to_string()),
        ];
        if let Some(date) = date {
            params.push(("date", date.format("%Y-%m-%dT%H:%M:%SZ").to_string()));
        }
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> FeedResult<T> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut last_error = FeedError::RequestFailed("no attempts made".to_string());

        for attempt in 1..=self.config.max_retries {
            let request = self
                .http
                .get(&url)
                .query(params)
                .query(&[("apiKey", self.api_key.as_str())]);

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        "Request to {} failed (attempt {}/{}): {}",
                        path, attempt, self.config.max_retries, e
                    );
                    last_error = FeedError::RequestFailed(e.to_string());
                    self.backoff(attempt).await;
                    continue;
                }
            };

            self.record_quota(&response);

            if response.status().as_u16() == 429 {
                warn!(
                    "Rate limit exceeded, retrying in {}s (attempt {}/{})",
                    self.config.retry_delay_secs, attempt, self.config.max_retries
                );
                last_error = FeedError::RateLimited;
                self.backoff(attempt).await;
                continue;
            }

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(FeedError::HttpStatus {
                    status: status.as_u16(),
                    body: body.chars().take(200).collect(),
                });
            }

            debug!("GET {} succeeded on attempt {}", path, attempt);
            return response
                .json::<T>()
                .await
                .map_err(|e| FeedError::InvalidResponse(e.to_string()));
        }

        Err(last_error)
    }

    async fn backoff(&self, attempt: u32) {
        if attempt < self.config.max_retries {
            tokio::time::sleep(Duration::from_secs(self.config.retry_delay_secs)).await;
        }
    }

    fn record_quota(&self, response: &reqwest::Response) {
        let remaining = parse_quota_header(response, REMAINING_HEADER);
        let used = parse_quota_header(response, USED_HEADER);

        if let Some(remaining) = remaining {
            if remaining < self.config.min_requests_remaining {
                warn!("Only {} API requests remaining", remaining);
            }
        }

        let mut quota = self.quota.write();
        if remaining.is_some() {
            quota.remaining = remaining;
        }
        if used.is_some() {
            quota.used = used;
        }
    }
}

fn parse_quota_header(response: &reqwest::Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        // The API has reported fractional quota values, so accept both
        .and_then(|s| s.trim().parse::<f64>().ok())
        .map(|v| v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_rejected() {
        let config = ApiConfig::default();
        std::env::remove_var("ODDS_API_KEY");
        assert!(matches!(
            OddsApiClient::new(config),
            Err(FeedError::MissingApiKey)
        ));
    }

    #[test]
    fn test_odds_params() {
        let regions = [Region::Us, Region::Uk];
        let markets = vec!["h2h".to_string(), "totals".to_string()];

        let params = OddsApiClient::odds_params(&regions, &markets, None);
        assert!(params.contains(&("regions", "us,uk".to_string())));
        assert!(params.contains(&("markets", "h2h,totals".to_string())));
        assert!(params.contains(&("oddsFormat", "decimal".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "date"));

        let date = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let params = OddsApiClient::odds_params(&regions, &markets, Some(date));
        assert!(params.contains(&("date", "2024-01-15T00:00:00Z".to_string())));
    }
}
