//! Tradable assets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two outcome tokens listed on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    /// HYPE token.
    #[serde(alias = "hype")]
    Hype,
    /// FLOP token.
    #[serde(alias = "flop")]
    Flop,
}

impl Asset {
    /// All listed assets, in display order.
    pub const ALL: [Self; 2] = [Self::Hype, Self::Flop];

    /// Upper-case ticker sent in limit payloads.
    #[must_use]
    pub const fn ticker(&self) -> &'static str {
        match self {
            Self::Hype => "HYPE",
            Self::Flop => "FLOP",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Asset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hype" => Ok(Self::Hype),
            "flop" => Ok(Self::Flop),
            other => Err(format!("unknown asset: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_ticker_and_display() {
        assert_eq!(Asset::Hype.ticker(), "HYPE");
        assert_eq!(Asset::Flop.to_string(), "FLOP");
    }

    #[test]
    fn asset_from_str_is_case_insensitive() {
        assert_eq!("HYPE".parse::<Asset>().unwrap(), Asset::Hype);
        assert_eq!(" flop ".parse::<Asset>().unwrap(), Asset::Flop);
        assert!("moon".parse::<Asset>().is_err());
    }

    #[test]
    fn asset_serde_accepts_both_cases() {
        assert_eq!(serde_json::to_string(&Asset::Flop).unwrap(), "\"FLOP\"");
        let upper: Asset = serde_json::from_str("\"HYPE\"").unwrap();
        let lower: Asset = serde_json::from_str("\"hype\"").unwrap();
        assert_eq!(upper, lower);
    }
}
