//! The tie-breaking decision between the two personas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::product::ProductRecord;
use crate::rank;

/// How many candidates each persona weighs in before the final call
const DEBATE_CANDIDATES: usize = 3;

/// Which persona the user sides with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Side with the quality persona
    Quality,
    /// Side with the price persona
    Price,
    /// Let value-for-money decide
    #[default]
    Neutral,
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Preference::Quality => "quality",
            Preference::Price => "price",
            Preference::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Preference {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quality" => Ok(Preference::Quality),
            "price" => Ok(Preference::Price),
            "neutral" => Ok(Preference::Neutral),
            other => Err(ScoutError::UnknownPreference(other.to_string())),
        }
    }
}

/// Pick the single final recommendation.
///
/// With an explicit preference the winning persona's top pick is taken,
/// falling back to the first raw product when that persona came up
/// empty. Neutral picks the best value-for-money among records that
/// carry both a price and a rating, with the same raw fallback. An
/// empty input yields `None` for every preference.
pub fn decide(products: &[ProductRecord], preference: Preference) -> Option<ProductRecord> {
    match preference {
        Preference::Quality => rank::rank_by_quality(products, DEBATE_CANDIDATES)
            .into_iter()
            .next()
            .or_else(|| products.first().cloned()),
        Preference::Price => rank::rank_by_price(products, DEBATE_CANDIDATES)
            .into_iter()
            .next()
            .or_else(|| products.first().cloned()),
        Preference::Neutral => best_value(products).or_else(|| products.first().cloned()),
    }
}

/// Highest value score among records with a real price and rating.
/// Ties keep the earliest record so repeated runs agree.
fn best_value(products: &[ProductRecord]) -> Option<ProductRecord> {
    let mut best: Option<&ProductRecord> = None;
    for candidate in products.iter().filter(|p| p.has_price() && p.is_rated()) {
        match best {
            Some(current) if candidate.value_score() <= current.value_score() => {}
            _ => best = Some(candidate),
        }
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Platform;

    fn record(title: &str, price: f64, rating: f64) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            price,
            rating,
            url: "https://example.com/p".to_string(),
            image: String::new(),
            platform: Platform::Flipkart,
        }
    }

    #[test]
    fn test_empty_input_is_no_result_for_every_preference() {
        for pref in [Preference::Quality, Preference::Price, Preference::Neutral] {
            assert!(decide(&[], pref).is_none());
        }
    }

    #[test]
    fn test_quality_preference_takes_quality_top_pick() {
        let products = vec![
            record("cheap", 100.0, 3.0),
            record("premium", 900.0, 4.8),
        ];
        let pick = decide(&products, Preference::Quality).unwrap();
        assert_eq!(pick.title, "premium");
    }

    #[test]
    fn test_price_preference_takes_price_top_pick() {
        let products = vec![
            record("cheap", 100.0, 3.0),
            record("premium", 900.0, 4.8),
        ];
        let pick = decide(&products, Preference::Price).unwrap();
        assert_eq!(pick.title, "cheap");
    }

    #[test]
    fn test_neutral_maximizes_value_score() {
        // 4/101 ≈ 0.0396 beats 1/51 ≈ 0.0196
        let products = vec![
            record("balanced", 100.0, 4.0),
            record("cheap-bad", 50.0, 1.0),
        ];
        let pick = decide(&products, Preference::Neutral).unwrap();
        assert_eq!(pick.title, "balanced");
    }

    #[test]
    fn test_neutral_value_tie_keeps_earliest() {
        let products = vec![
            record("first", 99.0, 4.0),
            record("second", 99.0, 4.0),
        ];
        let pick = decide(&products, Preference::Neutral).unwrap();
        assert_eq!(pick.title, "first");
    }

    #[test]
    fn test_neutral_falls_back_to_first_raw_product() {
        // Nothing carries both price and rating
        let products = vec![
            record("unpriced", 0.0, 4.5),
            record("unrated", 300.0, 0.0),
        ];
        let pick = decide(&products, Preference::Neutral).unwrap();
        assert_eq!(pick.title, "unpriced");
    }

    #[test]
    fn test_preference_parse() {
        assert_eq!("quality".parse::<Preference>().unwrap(), Preference::Quality);
        assert_eq!(" PRICE ".parse::<Preference>().unwrap(), Preference::Price);
        assert!("budget2".parse::<Preference>().is_err());
    }
}
