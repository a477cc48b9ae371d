//! This module serves as the public API for the collection of pure, stateless
//! rounding kernels.
//!
//! Every kernel is a generic function over an Arrow primitive type whose native
//! type implements `RoundNative`; the registry instantiates each one per
//! concrete numeric type. The rounding mode stays a runtime parameter inside
//! the type-generic body.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// ceil / floor / round / trunc over a single array.
pub mod unary;

/// round to N digits, with N supplied per element by a second array.
pub mod binary;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use binary::round_binary;
pub use unary::{round_unary, UnaryRound};

//==================================================================================
// 3. Type Dispatch Helper
//==================================================================================

/// Binds `$T` to the Arrow primitive type matching a `NumericType` tag and
/// evaluates `$body` with it.
#[macro_export]
macro_rules! with_match_numeric_type {
    ($numeric_type:expr, |$T:ident| $body:expr) => {{
        use arrow::datatypes::*;
        use $crate::types::NumericType;
        match $numeric_type {
            NumericType::Int8 => {
                type $T = Int8Type;
                $body
            }
            NumericType::Int16 => {
                type $T = Int16Type;
                $body
            }
            NumericType::Int32 => {
                type $T = Int32Type;
                $body
            }
            NumericType::Int64 => {
                type $T = Int64Type;
                $body
            }
            NumericType::UInt8 => {
                type $T = UInt8Type;
                $body
            }
            NumericType::UInt16 => {
                type $T = UInt16Type;
                $body
            }
            NumericType::UInt32 => {
                type $T = UInt32Type;
                $body
            }
            NumericType::UInt64 => {
                type $T = UInt64Type;
                $body
            }
            NumericType::Float32 => {
                type $T = Float32Type;
                $body
            }
            NumericType::Float64 => {
                type $T = Float64Type;
                $body
            }
        }
    }};
}
