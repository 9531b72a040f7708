//! Cross-platform aggregation for one query.
//!
//! Platforms are queried in a fixed priority order and their results
//! concatenated as-is: no deduplication, no re-sorting. The fashion
//! platform only joins the plan when the query looks like a fashion
//! query; that inclusion rule is a fixed vocabulary, not a heuristic to
//! extend.

use crate::product::{Platform, ProductRecord};
use crate::sites;

/// Queries containing any of these terms also search the fashion
/// platform
const FASHION_KEYWORDS: [&str; 6] = [
    "clothing",
    "fashion",
    "shirt",
    "dress",
    "shoes",
    "accessories",
];

/// Case-insensitive substring match against the fashion vocabulary
pub fn is_fashion_query(query: &str) -> bool {
    let lower = query.to_lowercase();
    FASHION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// The platforms that will be searched for this query, in fixed
/// priority order
pub fn plan_sources(query: &str, enabled: &[Platform]) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|p| enabled.contains(p))
        .filter(|p| *p != Platform::Myntra || is_fashion_query(query))
        .collect()
}

/// Search every planned platform and concatenate the results.
///
/// Always returns a list, possibly empty; per-platform failures are
/// contained inside the adapters.
pub fn aggregate(query: &str, max_results: usize, enabled: &[Platform]) -> Vec<ProductRecord> {
    let mut products = Vec::new();
    for platform in plan_sources(query, enabled) {
        products.extend(sites::search(platform, query, max_results));
    }
    products
}
