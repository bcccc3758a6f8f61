//! Shared test utilities for storefront integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The scripted products API is deterministic under
//! `tokio::time::pause()`; the fake index and spawned app bind real TCP ports.

pub mod app;
pub mod assertions;
pub mod builders;
pub mod fake_index;
pub mod fixtures;
pub mod recording_backend;
pub mod scripted_api;

pub use app::*;
pub use builders::*;
pub use fixtures::*;
pub use recording_backend::RecordingBackend;
pub use scripted_api::ScriptedProductsApi;
