// In: src/compute/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Compute Layer
// ====================================================================================
//
// Two ways into the same kernels:
//
//   1. [FunctionRegistry::invoke]  -> name + `&[ArrayRef]` + optional options
//         |
//         `-> resolves (function, type signature) to a registered kernel
//
//   2. [compute::round, ...]       -> `&dyn Array` + typed options
//         |
//         `-> matches the array's `NumericType` tag and calls the generic kernel
//             directly, with the default execution config
//
// Both paths end in `kernels::round_unary` / `kernels::round_binary`, so they
// produce identical results for identical inputs.

pub mod stateless_api;


pub use stateless_api::{ceil, floor, round, round_binary, trunc};
