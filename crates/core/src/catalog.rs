//! Sport, market and region catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bookmaker regions supported by The Odds API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    Eu,
    Au,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Uk => "uk",
            Region::Eu => "eu",
            Region::Au => "au",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Uk => "United Kingdom",
            Region::Eu => "Europe",
            Region::Au => "Australia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Region::Us),
            "uk" => Ok(Region::Uk),
            "eu" => Ok(Region::Eu),
            "au" => Ok(Region::Au),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

/// Join regions into the comma-separated form the API expects
pub fn regions_param(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Human-readable title for a known sport key
///
/// Sport keys are an open set on the API side, so unknown keys are
/// simply not titled rather than rejected.
pub fn sport_title(key: &str) -> Option<&'static str> {
    let title = match key {
        "soccer_epl" => "English Premier League",
        "soccer_uefa_champs_league" => "UEFA Champions League",
        "basketball_nba" => "NBA",
        "basketball_wnba" => "WNBA",
        "americanfootball_nfl" => "NFL",
        "baseball_mlb" => "MLB",
        "icehockey_nhl" => "NHL",
        "tennis_wta" => "WTA Tennis",
        "tennis_atp" => "ATP Tennis",
        "mma_mixed_martial_arts" => "MMA",
        "boxing_boxing" => "Boxing",
        _ => return None,
    };
    Some(title)
}

/// Human-readable title for a known market key
pub fn market_title(key: &str) -> Option<&'static str> {
    let title = match key {
        "h2h" => "Head to Head (Moneyline)",
        "spreads" => "Point Spreads",
        "totals" => "Over/Under Totals",
        "outrights" => "Tournament Winner",
        "player_points" => "Player Points",
        "player_rebounds" => "Player Rebounds",
        "player_assists" => "Player Assists",
        "player_threes" => "Player Three-Pointers",
        _ => return None,
    };
    Some(title)
}

/// Title for display, falling back to the raw key
pub fn sport_label(key: &str) -> &str {
    sport_title(key).unwrap_or(key)
}

pub fn market_label(key: &str) -> &str {
    market_title(key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_roundtrip() {
        for region in [Region::Us, Region::Uk, Region::Eu, Region::Au] {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
        assert!("mars".parse::<Region>().is_err());
    }

    #[test]
    fn test_regions_param() {
        assert_eq!(regions_param(&[Region::Us, Region::Uk, Region::Eu]), "us,uk,eu");
        assert_eq!(regions_param(&[]), "");
    }

    #[test]
    fn test_labels_fall_back_to_key() {
        assert_eq!(sport_label("soccer_epl"), "English Premier League");
        assert_eq!(sport_label("curling_winter"), "curling_winter");
        assert_eq!(market_label("h2h"), "Head to Head (Moneyline)");
        assert_eq!(market_label("player_steals"), "player_steals");
    }
}
