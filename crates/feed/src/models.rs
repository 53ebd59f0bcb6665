//! The Odds API v4 wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use oddsarb_core::EventInfo;

/// Entry from the /v4/sports listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportInfo {
    pub key: String,
    pub group: String,
    pub title: String,
    pub description: String,
    pub active: bool,
    pub has_outrights: bool,
}

/// One priced outcome inside a bookmaker's market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOutcome {
    pub name: String,
    pub price: f64,
    /// Spread/total line, present for handicap-style markets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
}

/// A market as quoted by one bookmaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmakerMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<MarketOutcome>,
}

/// A bookmaker's quotes for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmaker {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<BookmakerMarket>,
}

/// An event with quotes from multiple bookmakers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsEvent {
    pub id: String,
    pub sport_key: String,
    #[serde(default)]
    pub sport_title: String,
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

impl OddsEvent {
    /// Descriptive context carried into opportunity records
    pub fn info(&self) -> EventInfo {
        EventInfo {
            id: self.id.clone(),
            sport_key: self.sport_key.clone(),
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            commence_time: self.commence_time,
        }
    }
}

/// Point-in-time snapshot from the historical odds endpoint
///
/// Unlike the live endpoint, historical responses wrap the event list in
/// an object carrying the snapshot timestamp and its neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: Vec<OddsEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_JSON: &str = r#"{
        "id": "bda33adca828c09dc3cac3a856aef176",
        "sport_key": "soccer_epl",
        "sport_title": "EPL",
        "commence_time": "2024-01-15T20:00:00Z",
        "home_team": "Arsenal",
        "away_team": "Chelsea",
        "bookmakers": [
            {
                "key": "betfair",
                "title": "Betfair",
                "last_update": "2024-01-15T19:55:01Z",
                "markets": [
                    {
                        "key": "h2h",
                        "outcomes": [
                            {"name": "Arsenal", "price": 2.1},
                            {"name": "Chelsea", "price": 3.6},
                            {"name": "Draw", "price": 3.4}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_event_deserialization() {
        let event: OddsEvent = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.home_team, "Arsenal");
        assert_eq!(event.bookmakers.len(), 1);

        let market = &event.bookmakers[0].markets[0];
        assert_eq!(market.key, "h2h");
        assert_eq!(market.outcomes.len(), 3);
        assert_eq!(market.outcomes[1].price, 3.6);
        assert!(market.outcomes[1].point.is_none());

        let info = event.info();
        assert_eq!(info.id, event.id);
        assert_eq!(info.sport_key, "soccer_epl");
    }

    #[test]
    fn test_missing_bookmakers_defaults_empty() {
        let json = r#"{
            "id": "x",
            "sport_key": "soccer_epl",
            "commence_time": "2024-01-15T20:00:00Z",
            "home_team": "A",
            "away_team": "B"
        }"#;
        let event: OddsEvent = serde_json::from_str(json).unwrap();
        assert!(event.bookmakers.is_empty());
    }

    #[test]
    fn test_historical_snapshot_wrapper() {
        let json = format!(
            r#"{{
                "timestamp": "2024-01-15T12:00:00Z",
                "previous_timestamp": "2024-01-15T11:55:00Z",
                "next_timestamp": "2024-01-15T12:05:00Z",
                "data": [{EVENT_JSON}]
            }}"#
        );
        let snapshot: HistoricalSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.data.len(), 1);
        assert!(snapshot.previous_timestamp.is_some());
    }
}
