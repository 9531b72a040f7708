//! The full search pipeline: aggregate, rank, decide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::cache::SearchCache;
use crate::decide::{self, Preference};
use crate::product::{Platform, ProductRecord};
use crate::rank;

/// How many entries each persona contributes to the outcome
pub const TOP_RECOMMENDATIONS: usize = 3;

/// One search, as handed over by the calling layer
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    /// Per-platform listing cap
    pub max_results: usize,
    pub platforms: Vec<Platform>,
    pub preference: Preference,
}

/// Everything one search produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// All extracted records, in platform priority then document order
    pub products: Vec<ProductRecord>,
    pub quality_recommendations: Vec<ProductRecord>,
    pub price_recommendations: Vec<ProductRecord>,
    pub final_recommendation: Option<ProductRecord>,
    pub searched_at: DateTime<Utc>,
}

/// Run one search end to end. Never errors: a query that finds nothing
/// anywhere yields a well-formed empty outcome.
pub fn run(request: &SearchRequest) -> SearchOutcome {
    let products = aggregate::aggregate(
        &request.query,
        request.max_results,
        &request.platforms,
    );
    rank_and_decide(products, request.preference)
}

/// The pure tail of the pipeline, shared by `run` and offline re-ranking
/// of already-extracted records.
pub fn rank_and_decide(products: Vec<ProductRecord>, preference: Preference) -> SearchOutcome {
    let quality_recommendations = rank::rank_by_quality(&products, TOP_RECOMMENDATIONS);
    let price_recommendations = rank::rank_by_price(&products, TOP_RECOMMENDATIONS);
    let final_recommendation = decide::decide(&products, preference);

    SearchOutcome {
        products,
        quality_recommendations,
        price_recommendations,
        final_recommendation,
        searched_at: Utc::now(),
    }
}

/// Memoized variant of `run` for embedding layers that hold a cache
pub fn run_cached(request: &SearchRequest, cache: &SearchCache) -> SearchOutcome {
    if let Some(hit) = cache.get(&request.query, request.preference, request.max_results) {
        return hit;
    }

    let outcome = run(request);
    cache.put(
        &request.query,
        request.preference,
        request.max_results,
        outcome.clone(),
    );
    outcome
}
