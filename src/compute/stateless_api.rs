// In: src/compute/stateless_api.rs

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, AsArray, PrimitiveArray};
use arrow::datatypes::{ArrowPrimitiveType, Int32Type};

use crate::config::ComputeConfig;
use crate::error::ComputeError;
use crate::kernels::{self, UnaryRound};
use crate::options::{RoundBinaryOptions, RoundMode, RoundOptions};
use crate::types::NumericType;
use crate::with_match_numeric_type;

fn type_mismatch(function: &str, arrays: &[&dyn Array]) -> ComputeError {
    ComputeError::TypeMismatch {
        function: function.to_string(),
        types: arrays
            .iter()
            .map(|a| a.data_type().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn downcast<'a, T: ArrowPrimitiveType>(
    function: &str,
    array: &'a dyn Array,
) -> Result<&'a PrimitiveArray<T>, ComputeError> {
    array
        .as_primitive_opt::<T>()
        .ok_or_else(|| type_mismatch(function, &[array]))
}

fn unary(
    op: UnaryRound,
    function: &str,
    array: &dyn Array,
    mode: RoundMode,
) -> Result<ArrayRef, ComputeError> {
    let numeric_type = NumericType::from_arrow_type(array.data_type())
        .map_err(|_| type_mismatch(function, &[array]))?;
    let config = ComputeConfig::default();

    with_match_numeric_type!(numeric_type, |T| {
        let typed = downcast::<T>(function, array)?;
        let out = kernels::round_unary(typed, op, mode, &config.parallelism);
        Ok(Arc::new(out) as ArrayRef)
    })
}

/// Rounds every element of a numeric array towards positive infinity.
pub fn ceil(array: &dyn Array) -> Result<ArrayRef, ComputeError> {
    unary(UnaryRound::Ceil, "ceil", array, RoundMode::Up)
}

/// Rounds every element of a numeric array towards negative infinity.
pub fn floor(array: &dyn Array) -> Result<ArrayRef, ComputeError> {
    unary(UnaryRound::Floor, "floor", array, RoundMode::Down)
}

/// Rounds every element of a numeric array towards zero.
pub fn trunc(array: &dyn Array) -> Result<ArrayRef, ComputeError> {
    unary(UnaryRound::Trunc, "trunc", array, RoundMode::TowardsZero)
}

/// Rounds every element of a numeric array to an integral value under
/// `options.round_mode`.
pub fn round(array: &dyn Array, options: &RoundOptions) -> Result<ArrayRef, ComputeError> {
    unary(UnaryRound::Round, "round", array, options.round_mode)
}

/// Rounds `values[i]` to `ndigits[i]` decimal digits under `options.round_mode`.
///
/// `ndigits` must be an `Int32` array of the same length as `values`. A null in
/// either input makes the output null at that position.
pub fn round_binary(
    values: &dyn Array,
    ndigits: &dyn Array,
    options: &RoundBinaryOptions,
) -> Result<ArrayRef, ComputeError> {
    const FUNCTION: &str = "round_binary";

    let numeric_type = NumericType::from_arrow_type(values.data_type())
        .map_err(|_| type_mismatch(FUNCTION, &[values, ndigits]))?;
    let digits = ndigits
        .as_primitive_opt::<Int32Type>()
        .ok_or_else(|| type_mismatch(FUNCTION, &[values, ndigits]))?;
    let config = ComputeConfig::default();

    with_match_numeric_type!(numeric_type, |T| {
        let typed = downcast::<T>(FUNCTION, values)?;
        let out = kernels::round_binary(typed, digits, options.round_mode, &config.parallelism)?;
        Ok(Arc::new(out) as ArrayRef)
    })
}
