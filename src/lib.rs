//! This file is the root of the `round_kernels` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`, `registry`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types most callers need, so that
//!     `use round_kernels::{FunctionRegistry, RoundMode, ...}` is enough to
//!     invoke a rounding function.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod compute;
pub mod config;
pub mod error;
pub mod kernels;
pub mod null_handling;
pub mod options;
pub mod registry;
pub mod testing;
pub mod traits;
pub mod types;
pub mod utils;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{ComputeConfig, ParallelismConfig};
pub use error::ComputeError;
pub use options::{FunctionOptions, RoundBinaryOptions, RoundMode, RoundOptions};
pub use registry::{FunctionName, FunctionRegistry};
pub use types::NumericType;
