//! This module serves as the public API for all validity (null) handling within
//! the rounding kernels.
//!
//! Kernels never look at a value slot whose validity bit is clear: the output
//! bitmap is derived from the input bitmap(s) up front, and the element-wise
//! map only runs the rounding function on valid slots.
//!
//! This module is PURE RUST over Arrow buffers and has no knowledge of rounding.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bitmap propagation, combination and null-skipping element maps.
pub mod bitmap;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use bitmap::{build_array, combine_binary, map_valid, propagate_unary};

//==================================================================================
// 3. Unit Tests (Module-level integration tests)
//==================================================================================
