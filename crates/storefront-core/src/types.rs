//! Core types shared by the server endpoint, the remote adapters and the
//! client session: the validated [`ProductFilter`], the backend
//! [`SearchRequest`] and the [`SearchHit`] items that come back.

use crate::vocab::{Color, Size, SortMode};
use serde::{Deserialize, Serialize};

/// A `(low, high)` price pair, serialized as a two-element array.
///
/// Ordering is not enforced: a custom slider drag may produce `low > high`.
/// Use [`PriceRange::normalized`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `(min, max)` of the pair, regardless of stored order.
    pub fn normalized(self) -> (f64, f64) {
        (self.low.min(self.high), self.low.max(self.high))
    }
}

impl From<[f64; 2]> for PriceRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.low, range.high]
    }
}

/// Facet selections as they cross the client/server boundary.
///
/// On the server a `ProductFilter` only exists once
/// [`validate_request`](crate::validator::validate_request) has accepted the
/// payload, so predicate compilation never sees out-of-vocabulary input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub color: Vec<Color>,
    pub size: Vec<Size>,
    pub sort: SortMode,
    pub price: PriceRange,
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsRequest {
    pub filter: ProductFilter,
}

/// A single nearest-neighbor query against the vector index.
///
/// Field names follow the index's REST dialect (`topK`, `vector`,
/// `includeMetadata`, `filter`). An absent `filter` means "match all".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "topK")]
    pub result_limit: usize,
    #[serde(rename = "vector")]
    pub ranking_vector: Vec<f64>,
    #[serde(rename = "includeMetadata")]
    pub include_metadata: bool,
    #[serde(rename = "filter", default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}

/// One ranked item returned by the index.
///
/// `metadata` is the catalog's payload (name, price, imageId, …); its shape is
/// not interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl SearchHit {
    /// Convenience accessor for a string metadata field.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get(key)?.as_str()
    }

    /// Convenience accessor for a numeric metadata field.
    pub fn metadata_f64(&self, key: &str) -> Option<f64> {
        self.metadata.as_ref()?.get(key)?.as_f64()
    }
}
