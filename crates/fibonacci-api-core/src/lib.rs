//! Core Fibonacci computation for fibonacci-api.
//!
//! This crate provides the transport-independent pieces of the service:
//! - [`fibonacci`]: Iterative, arbitrary-precision Fibonacci engine
//! - [`Calculator`]: Validating handlers for single values and sequences
//! - [`SingleResult`] / [`SequenceResult`]: Response records
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Calculator                         │
//! │  (Shared across all requests, immutable)                │
//! │  - Input bounds from LimitsConfig                       │
//! │  - Validation before any computation                    │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   fibonacci(n)                          │
//! │  (Pure function, no caching)                            │
//! │  - O(n) pairwise recurrence over BigUint                │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │          SingleResult / SequenceResult                  │
//! │  (Per-request, serialized at the HTTP boundary)         │
//! │  - Exact integers as JSON number literals               │
//! │  - Elapsed seconds rounded to 6 decimals                │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod calculator;
pub mod engine;
pub mod result;
pub mod timing;

pub use calculator::Calculator;
pub use engine::fibonacci;
pub use result::{SequenceResult, SingleResult};
