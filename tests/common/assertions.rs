//! Domain-specific assertion macros for storefront harnesses.
//!
//! These add context-rich failure messages that make it clear which part of
//! the compiled query or which validation path was wrong.

/// Assert that a `SearchRequest` ranks with the given price component.
///
/// ```rust
/// assert_price_component!(request, 0.0);
/// ```
#[macro_export]
macro_rules! assert_price_component {
    ($request:expr, $expected:expr) => {{
        let request: &storefront_core::SearchRequest = &$request;
        let expected: f64 = $expected;
        let dim = storefront_core::config::RankingConfig::default().price_dimension;
        match request.ranking_vector.get(dim) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_price_component! failed:\n  expected: {}\n  actual:   {}\n  vector:   {:?}",
                expected, actual, request.ranking_vector
            ),
            None => panic!(
                "assert_price_component! failed: vector has no dimension {}: {:?}",
                dim, request.ranking_vector
            ),
        }
    }};
}

/// Assert that a validation result was rejected at the given path.
///
/// ```rust
/// assert_rejected_at!(validate_request(&body), "filter.sort");
/// ```
#[macro_export]
macro_rules! assert_rejected_at {
    ($result:expr, $path:expr) => {{
        match $result {
            Ok(filter) => panic!(
                "assert_rejected_at! failed: payload was accepted as {:?}",
                filter
            ),
            Err(err) => {
                let err: storefront_core::validator::ValidationError = err;
                if err.path != $path {
                    panic!(
                        "assert_rejected_at! failed:\n  expected path: {:?}\n  actual path:   {:?}\n  reason: {}",
                        $path, err.path, err.reason
                    );
                }
            }
        }
    }};
}
