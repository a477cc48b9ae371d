//! This module defines the core, strongly-typed data representations used
//! throughout the rounding kernels.
//!
//! It currently includes the canonical `NumericType` enum, the typed tag over
//! the ten element types the kernels are instantiated for. Dispatch matches on
//! it instead of comparing Arrow `DataType`s or type-name strings.

pub mod numeric_type;

// Re-export the main type(s) for easier access.
pub use numeric_type::NumericType;
