//! Synthetic data for tests and benchmarks.
//!
//! Everything here is seeded, so two runs with the same seed see the same arrays.

pub mod random;

pub use random::{RandomArrayGenerator, DEFAULT_SEED};
