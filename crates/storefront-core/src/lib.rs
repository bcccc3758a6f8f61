//! storefront-core: faceted product search, compilation layer.
//!
//! This crate holds everything that turns a set of facet selections into a
//! query the vector index understands, plus the types shared by the server
//! endpoint and the client session.
//!
//! # Pipeline
//!
//! ```text
//! untrusted JSON ──► validator ──► ProductFilter ──► filter::compile ──► predicate
//!                                        │                                   │
//!                                        └──► ranking::ranking_vector ───────┴──► SearchRequest
//! ```

pub mod config;
pub mod filter;
pub mod ranking;
pub mod types;
pub mod validator;
pub mod vocab;

pub use types::{PriceRange, ProductFilter, ProductsRequest, SearchHit, SearchRequest};
pub use vocab::{Color, Size, SortMode};
