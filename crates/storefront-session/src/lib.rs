//! storefront-session: the client side of faceted browsing.
//!
//! A session owns one [`FacetStore`] (through the [`Dispatcher`]) and one
//! [`QueryCache`], created at session start and passed in explicitly. Facet
//! edits are debounced into product queries; results are applied in issue
//! order and published to subscribers.

pub mod cache;
pub mod client;
pub mod commands;
pub mod debounce;
pub mod dispatcher;
pub mod facets;

pub use cache::{QueryCache, ResultSnapshot};
pub use client::{ClientError, HttpProductsApi, ProductsApi};
pub use commands::{Command, CommandError};
pub use debounce::Debouncer;
pub use dispatcher::Dispatcher;
pub use facets::{FacetEvent, FacetSelection, FacetStore, MultiFacet, PricePreset, PriceSelection};
