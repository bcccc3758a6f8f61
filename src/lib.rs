//! storefront: faceted product search over a vector index.
//!
//! This crate wires the workspace layers into the two halves of the system:
//! the HTTP products endpoint ([`api`]) and the interactive browse session
//! ([`browse`]).
//!
//! # Architecture
//!
//! ```text
//! browse ──► Dispatcher ──(debounced)──► POST /api/products ──► validator ──► compile ──► VectorIndex
//!   ▲            │                                                                          │
//!   └────────────┴──────────────── QueryCache ◄──────────── ranked hits ◄──────────────────┘
//! ```

pub mod api;
pub mod browse;
