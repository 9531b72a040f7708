use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoutError;

/// Sentinel for text fields where no locator matched
pub const MISSING_TEXT: &str = "N/A";

/// A supported shopping platform.
///
/// The icon is decorative only; nothing downstream keys off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Flipkart,
    Myntra,
}

impl Platform {
    /// All platforms in aggregation priority order
    pub const ALL: [Platform; 3] = [Platform::Amazon, Platform::Flipkart, Platform::Myntra];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
            Platform::Myntra => "Myntra",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Amazon => "📦",
            Platform::Flipkart => "🛒",
            Platform::Myntra => "👕",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Platform {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon" => Ok(Platform::Amazon),
            "flipkart" => Ok(Platform::Flipkart),
            "myntra" => Ok(Platform::Myntra),
            other => Err(ScoutError::UnknownPlatform(other.to_string())),
        }
    }
}

/// One normalized product listing.
///
/// Every field is always populated; missing data is represented by
/// sentinels (`"N/A"` for text, `0.0` for numbers). A zero price means
/// "no usable price", not "free", and a zero rating means "unrated" —
/// the ranking filters rely on that distinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub url: String,
    pub image: String,
    pub platform: Platform,
}

impl ProductRecord {
    /// Whether the listing carries a usable price
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }

    /// Whether the listing carries a rating
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// Quality per currency unit. The `+1` keeps the score finite for
    /// very cheap items and dampens their influence.
    pub fn value_score(&self) -> f64 {
        self.rating / (self.price + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, rating: f64) -> ProductRecord {
        ProductRecord {
            title: "Test".to_string(),
            price,
            rating,
            url: MISSING_TEXT.to_string(),
            image: String::new(),
            platform: Platform::Amazon,
        }
    }

    #[test]
    fn test_sentinels_are_not_usable_values() {
        let missing = record(0.0, 0.0);
        assert!(!missing.has_price());
        assert!(!missing.is_rated());

        let real = record(499.0, 4.2);
        assert!(real.has_price());
        assert!(real.is_rated());
    }

    #[test]
    fn test_value_score() {
        let p = record(100.0, 4.0);
        assert!((p.value_score() - 4.0 / 101.0).abs() < 1e-9);

        // Finite even at the price sentinel
        let free = record(0.0, 5.0);
        assert_eq!(free.value_score(), 5.0);
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("amazon".parse::<Platform>().unwrap(), Platform::Amazon);
        assert_eq!(" Flipkart ".parse::<Platform>().unwrap(), Platform::Flipkart);
        assert!("ebay".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serde_roundtrip() {
        let json = serde_json::to_string(&Platform::Myntra).unwrap();
        assert_eq!(json, "\"myntra\"");
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::Myntra);
    }
}
