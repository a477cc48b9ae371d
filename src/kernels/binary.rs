//! This module contains the pure, stateless kernel for `round_binary`: round
//! each value to the number of decimal digits given by the matching element of
//! a second, Int32 array.
//!
//! Positive digit counts round right of the decimal point, negative ones to
//! tens, hundreds, and so on. An output slot is null when either input slot is.

use arrow::array::{Array, Int32Array, PrimitiveArray};
use arrow::datatypes::ArrowPrimitiveType;

use crate::config::ParallelismConfig;
use crate::error::ComputeError;
use crate::null_handling::{combine_binary, map_valid};
use crate::options::RoundMode;
use crate::traits::RoundNative;

/// Rounds `values[i]` to `ndigits[i]` decimal digits under `mode`.
///
/// # Errors
/// Returns `ComputeError::LengthMismatch` if the two arrays differ in length.
pub fn round_binary<T>(
    values: &PrimitiveArray<T>,
    ndigits: &Int32Array,
    mode: RoundMode,
    parallelism: &ParallelismConfig,
) -> Result<PrimitiveArray<T>, ComputeError>
where
    T: ArrowPrimitiveType,
    T::Native: RoundNative,
{
    if values.len() != ndigits.len() {
        return Err(ComputeError::LengthMismatch {
            values: values.len(),
            digits: ndigits.len(),
        });
    }

    log::trace!(
        "round_binary: {} ({} rows, mode {})",
        T::DATA_TYPE,
        values.len(),
        mode
    );

    let nulls = combine_binary(values.nulls(), ndigits.nulls());
    let digits = ndigits.values();
    let out = map_valid(values.values(), nulls.as_ref(), parallelism, |i, v| {
        v.round_digits(digits[i], mode)
    });
    Ok(PrimitiveArray::<T>::new(out.into(), nulls))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Float32Array, Float64Array, Int16Array, Int32Array, UInt8Array};

    fn serial() -> ParallelismConfig {
        ParallelismConfig {
            enabled: false,
            ..ParallelismConfig::default()
        }
    }

    #[test]
    fn test_round_to_two_digits() {
        let values = Float64Array::from(vec![3.14159]);
        let digits = Int32Array::from(vec![2]);
        let out = round_binary(&values, &digits, RoundMode::HalfUp, &serial()).unwrap();
        assert_eq!(out, Float64Array::from(vec![3.14]));
    }

    #[test]
    fn test_digits_vary_per_row() {
        let values = Float64Array::from(vec![1234.5678, 1234.5678, 1234.5678, 1234.5678]);
        let digits = Int32Array::from(vec![2, 0, -1, -3]);
        let out = round_binary(&values, &digits, RoundMode::HalfToEven, &serial()).unwrap();
        assert_eq!(out, Float64Array::from(vec![1234.57, 1235.0, 1230.0, 1000.0]));
    }

    #[test]
    fn test_null_in_either_input_nulls_the_output() {
        let values = Float64Array::from(vec![Some(1.25), None, Some(2.75), Some(9.5)]);
        let digits = Int32Array::from(vec![Some(1), Some(1), None, Some(0)]);
        let out = round_binary(&values, &digits, RoundMode::HalfToEven, &serial()).unwrap();
        assert_eq!(out, Float64Array::from(vec![Some(1.2), None, None, Some(10.0)]));
        assert_eq!(out.null_count(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let values = Float32Array::from(vec![1.0, 2.0]);
        let digits = Int32Array::from(vec![1]);
        let err = round_binary(&values, &digits, RoundMode::Up, &serial()).unwrap_err();
        assert!(matches!(err, ComputeError::LengthMismatch { values: 2, digits: 1 }));
    }

    #[test]
    fn test_idempotent_under_half_to_even() {
        let values = Float64Array::from(vec![0.125, 2.675, -13.4449, 1e-7, 98765.4321]);
        let digits = Int32Array::from(vec![2, 2, 3, 5, -2]);
        let once = round_binary(&values, &digits, RoundMode::HalfToEven, &serial()).unwrap();
        let twice = round_binary(&once, &digits, RoundMode::HalfToEven, &serial()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_integer_values_with_negative_digits() {
        let values = Int16Array::from(vec![1234, -1250, 32_767, 5]);
        let digits = Int32Array::from(vec![-2, -2, -3, 4]);
        let out = round_binary(&values, &digits, RoundMode::HalfToEven, &serial()).unwrap();
        assert_eq!(out, Int16Array::from(vec![1200, -1200, i16::MAX, 5]));

        let values = UInt8Array::from(vec![249, 251]);
        let digits = Int32Array::from(vec![-1, -2]);
        let out = round_binary(&values, &digits, RoundMode::Up, &serial()).unwrap();
        assert_eq!(out, UInt8Array::from(vec![250, u8::MAX]));
    }

    #[test]
    fn test_extreme_digit_counts_saturate() {
        let values = Float64Array::from(vec![1.5, 1.5, f64::MAX, -f64::MAX]);
        let digits = Int32Array::from(vec![i32::MAX, i32::MIN, -308, -308]);
        let out = round_binary(&values, &digits, RoundMode::TowardsInfinity, &serial()).unwrap();
        assert_eq!(out, Float64Array::from(vec![1.5, f64::MAX, f64::MAX, -f64::MAX]));
    }
}
