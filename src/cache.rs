//! TTL cache for search outcomes.
//!
//! The pipeline is correct without any cache; this is a memoization
//! wrapper the embedding layer can inject to avoid re-scraping hot
//! queries. Entries are keyed by `(query, preference, max_results)`.

use std::time::Duration;

use moka::sync::Cache;

use crate::decide::Preference;
use crate::pipeline::SearchOutcome;

/// Default time-to-live for cached search outcomes
pub const DEFAULT_TTL_SECS: u64 = 300;

pub struct SearchCache {
    inner: Cache<String, SearchOutcome>,
}

impl SearchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).build(),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }

    fn key(query: &str, preference: Preference, max_results: usize) -> String {
        format!("{}|{}|{}", query.trim().to_lowercase(), preference, max_results)
    }

    pub fn get(
        &self,
        query: &str,
        preference: Preference,
        max_results: usize,
    ) -> Option<SearchOutcome> {
        self.inner.get(&Self::key(query, preference, max_results))
    }

    pub fn put(
        &self,
        query: &str,
        preference: Preference,
        max_results: usize,
        outcome: SearchOutcome,
    ) {
        self.inner
            .insert(Self::key(query, preference, max_results), outcome);
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn empty_outcome() -> SearchOutcome {
        SearchOutcome {
            products: Vec::new(),
            quality_recommendations: Vec::new(),
            price_recommendations: Vec::new(),
            final_recommendation: None,
            searched_at: Utc::now(),
        }
    }

    #[test]
    fn test_hit_requires_matching_key() {
        let cache = SearchCache::with_default_ttl();
        cache.put("earbuds", Preference::Neutral, 10, empty_outcome());

        assert!(cache.get("earbuds", Preference::Neutral, 10).is_some());
        assert!(cache.get("earbuds", Preference::Quality, 10).is_none());
        assert!(cache.get("earbuds", Preference::Neutral, 5).is_none());
        assert!(cache.get("laptop", Preference::Neutral, 10).is_none());
    }

    #[test]
    fn test_key_normalizes_query() {
        let cache = SearchCache::with_default_ttl();
        cache.put("  Earbuds ", Preference::Neutral, 10, empty_outcome());
        assert!(cache.get("earbuds", Preference::Neutral, 10).is_some());
    }

    #[test]
    fn test_entries_expire() {
        let cache = SearchCache::new(Duration::from_millis(40));
        cache.put("earbuds", Preference::Neutral, 10, empty_outcome());
        assert!(cache.get("earbuds", Preference::Neutral, 10).is_some());

        std::thread::sleep(Duration::from_millis(80));
        assert!(cache.get("earbuds", Preference::Neutral, 10).is_none());
    }

    #[test]
    fn test_clear() {
        let cache = SearchCache::with_default_ttl();
        cache.put("earbuds", Preference::Neutral, 10, empty_outcome());
        cache.clear();
        assert!(cache.get("earbuds", Preference::Neutral, 10).is_none());
    }
}
