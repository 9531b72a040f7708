//! The two persona ranking strategies.
//!
//! Both are pure and total: the same input always yields the same
//! output, and an empty input yields an empty output. When a persona's
//! filter would discard everything, it ranks the unfiltered input
//! instead — a persona must always have an opinion when there is
//! anything to rank.

use std::cmp::Ordering;

use crate::product::ProductRecord;

/// Minimum rating the quality persona takes seriously
const QUALITY_MIN_RATING: f64 = 3.5;

/// Minimum rating the price persona still tolerates
const PRICE_MIN_RATING: f64 = 2.5;

/// Quality-first ranking: highest rating wins, cheaper price breaks ties.
///
/// Records without a usable price or below the rating floor are dropped
/// unless that would drop everything.
pub fn rank_by_quality(products: &[ProductRecord], top_n: usize) -> Vec<ProductRecord> {
    let mut picks: Vec<ProductRecord> = products
        .iter()
        .filter(|p| p.rating >= QUALITY_MIN_RATING && p.has_price())
        .cloned()
        .collect();
    if picks.is_empty() {
        picks = products.to_vec();
    }

    picks.sort_by(|a, b| by_rating_then_price(a, b));
    picks.truncate(top_n);
    picks
}

/// Value-first ranking: lowest price wins, higher rating breaks ties.
///
/// Records without a usable price or rated below the tolerance floor
/// are dropped unless that would drop everything.
pub fn rank_by_price(products: &[ProductRecord], top_n: usize) -> Vec<ProductRecord> {
    let mut picks: Vec<ProductRecord> = products
        .iter()
        .filter(|p| p.has_price() && p.rating >= PRICE_MIN_RATING)
        .cloned()
        .collect();
    if picks.is_empty() {
        picks = products.to_vec();
    }

    picks.sort_by(|a, b| by_price_then_rating(a, b));
    picks.truncate(top_n);
    picks
}

fn by_rating_then_price(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then(a.price.total_cmp(&b.price))
}

fn by_price_then_rating(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    a.price
        .total_cmp(&b.price)
        .then(b.rating.total_cmp(&a.rating))
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
            platform: Platform::Amazon,
        }
    }

    fn titles(records: &[ProductRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_quality_sorts_rating_desc_then_price_asc() {
        let products = vec![
            record("mid", 500.0, 4.0),
            record("best-expensive", 900.0, 4.7),
            record("best-cheap", 700.0, 4.7),
            record("low", 100.0, 3.6),
        ];

        let ranked = rank_by_quality(&products, 10);
        assert_eq!(titles(&ranked), vec!["best-cheap", "best-expensive", "mid", "low"]);

        // Adjacent-pair property: rating strictly decreases, or rating
        // ties and price does not decrease.
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.rating > b.rating || (a.rating == b.rating && a.price <= b.price));
        }
    }

    #[test]
    fn test_quality_filters_unpriced_and_low_rated() {
        let products = vec![
            record("no-price", 0.0, 4.9),
            record("too-low", 300.0, 3.4),
            record("keeper", 400.0, 3.5),
        ];

        let ranked = rank_by_quality(&products, 10);
        assert_eq!(titles(&ranked), vec!["keeper"]);
    }

    #[test]
    fn test_price_sorts_price_asc_then_rating_desc() {
        let products = vec![
            record("cheap-good", 200.0, 4.5),
            record("cheap-ok", 200.0, 3.0),
            record("pricier", 350.0, 4.9),
        ];

        let ranked = rank_by_price(&products, 10);
        assert_eq!(titles(&ranked), vec!["cheap-good", "cheap-ok", "pricier"]);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.price < b.price || (a.price == b.price && a.rating >= b.rating));
        }
    }

    #[test]
    fn test_price_tolerance_floor() {
        let products = vec![
            record("junk", 50.0, 1.0),
            record("fine", 80.0, 2.5),
        ];

        let ranked = rank_by_price(&products, 10);
        assert_eq!(titles(&ranked), vec!["fine"]);
    }

    #[test]
    fn test_fallback_when_filter_would_empty() {
        // All prices are sentinels; both personas must still rank
        let products = vec![
            record("a", 0.0, 4.0),
            record("b", 0.0, 2.0),
            record("c", 0.0, 5.0),
        ];

        let by_quality = rank_by_quality(&products, 10);
        assert_eq!(titles(&by_quality), vec!["c", "a", "b"]);

        // Equal prices: rating breaks every tie
        let by_price = rank_by_price(&products, 10);
        assert_eq!(titles(&by_price), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_top_n_truncation() {
        let products = vec![
            record("a", 100.0, 4.0),
            record("b", 200.0, 4.5),
            record("c", 300.0, 5.0),
            record("d", 400.0, 3.6),
        ];

        assert_eq!(rank_by_quality(&products, 2).len(), 2);
        assert_eq!(rank_by_price(&products, 3).len(), 3);
        assert_eq!(rank_by_quality(&products, 0).len(), 0);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(rank_by_quality(&[], 3).is_empty());
        assert!(rank_by_price(&[], 3).is_empty());
    }

    #[test]
    fn test_determinism() {
        let products = vec![
            record("a", 100.0, 4.0),
            record("b", 100.0, 4.0),
            record("c", 90.0, 4.0),
        ];

        let first = rank_by_quality(&products, 3);
        let second = rank_by_quality(&products, 3);
        assert_eq!(titles(&first), titles(&second));
        // Stable sort keeps input order for full ties
        assert_eq!(titles(&first), vec!["c", "a", "b"]);
    }
}
