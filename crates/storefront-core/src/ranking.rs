//! Sort-to-vector mapping.
//!
//! The index ranks by vector distance and has no ORDER BY. A price ordering is
//! approximated by querying with a vector whose price component sits at one
//! end of the plausible price range: the cheapest items are nearest to
//! `min_price`, the most expensive nearest to `max_price`. With no preference
//! the query point sits at the catalog's average price so neither end is
//! favored. This is a nearest-neighbor approximation of a total order, not an
//! exact sort.

use crate::config::RankingConfig;
use crate::filter;
use crate::types::{ProductFilter, SearchRequest};
use crate::vocab::SortMode;

/// Number of results requested from the index per query.
pub const RESULT_LIMIT: usize = 12;

/// Price component of the query vector for a sort mode.
pub fn price_component(sort: SortMode, cfg: &RankingConfig) -> f64 {
    match sort {
        SortMode::None => cfg.avg_price,
        SortMode::PriceAsc => cfg.min_price,
        SortMode::PriceDesc => cfg.max_price,
    }
}

/// Query vector for a sort mode: zero everywhere except the price dimension.
pub fn ranking_vector(sort: SortMode, cfg: &RankingConfig) -> Vec<f64> {
    let mut vector = vec![0.0; cfg.dimensions.max(cfg.price_dimension + 1)];
    vector[cfg.price_dimension] = price_component(sort, cfg);
    vector
}

/// Build the full index request for a validated filter.
pub fn search_request(filter: &ProductFilter, cfg: &RankingConfig) -> SearchRequest {
    SearchRequest {
        result_limit: RESULT_LIMIT,
        ranking_vector: ranking_vector(filter.sort, cfg),
        include_metadata: true,
        predicate: filter::compile(filter).into_predicate(),
    }
}
