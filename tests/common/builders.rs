//! Test builders: ergonomic constructors for filters and search hits.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fake::faker::lorem::en::Words;
use fake::Fake;
use serde_json::{json, Value};
use storefront_core::{Color, PriceRange, ProductFilter, SearchHit, Size, SortMode};

// ---------------------------------------------------------------------------
// FilterBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`ProductFilter`] fixtures. Starts with no colors, no
/// sizes, no sort preference and the full `0..=100` price range.
///
/// ```rust
/// let filter = FilterBuilder::new()
///     .color(Color::Blue)
///     .size(Size::M)
///     .sort(SortMode::PriceAsc)
///     .price(0.0, 20.0)
///     .build();
/// ```
pub struct FilterBuilder {
    filter: ProductFilter,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            filter: ProductFilter {
                color: vec![],
                size: vec![],
                sort: SortMode::None,
                price: PriceRange::new(0.0, 100.0),
            },
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.filter.color.push(color);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.filter.size.push(size);
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.filter.sort = sort;
        self
    }

    pub fn price(mut self, low: f64, high: f64) -> Self {
        self.filter.price = PriceRange::new(low, high);
        self
    }

    pub fn build(self) -> ProductFilter {
        self.filter
    }

    /// The filter wrapped as a `POST /api/products` body.
    pub fn body(self) -> Value {
        json!({ "filter": self.filter })
    }
}

// ---------------------------------------------------------------------------
// Hits
// ---------------------------------------------------------------------------

/// A hit with catalog-style metadata and a random product name.
pub fn hit(id: &str, price: f64) -> SearchHit {
    let words: Vec<String> = Words(2..3).fake();
    let metadata = json!({
        "id": id,
        "name": words.join(" "),
        "price": price,
        "color": "white",
        "size": "M",
        "imageId": format!("/{id}.png"),
    });
    SearchHit {
        id: id.to_string(),
        score: 0.9,
        metadata: metadata.as_object().cloned(),
    }
}

/// `n` hits with ids `{prefix}-0 … {prefix}-{n-1}` and ascending prices.
pub fn hits(prefix: &str, n: usize) -> Vec<SearchHit> {
    (0..n)
        .map(|i| hit(&format!("{prefix}-{i}"), 5.0 + i as f64 * 4.0))
        .collect()
}

/// Ids of a hit list, for compact assertions.
pub fn ids(hits: &[SearchHit]) -> Vec<String> {
    hits.iter().map(|h| h.id.clone()).collect()
}
