//! This module contains the pure, stateless kernels for `ceil`, `floor`,
//! `round` and `trunc`.
//!
//! The four operations share one body. `ceil`, `floor` and `trunc` pin their
//! direction (UP, DOWN, TOWARDS_ZERO) and ignore the caller's mode; only
//! `round` honours all ten modes.

use arrow::array::{Array, PrimitiveArray};
use arrow::datatypes::ArrowPrimitiveType;
use serde::{Deserialize, Serialize};

use crate::config::ParallelismConfig;
use crate::null_handling::{map_valid, propagate_unary};
use crate::options::RoundMode;
use crate::traits::RoundNative;

/// The four unary rounding operations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnaryRound {
    Ceil,
    Floor,
    Round,
    Trunc,
}

impl UnaryRound {
    /// The mode the operation actually applies given the caller's request.
    pub fn effective_mode(&self, requested: RoundMode) -> RoundMode {
        match self {
            UnaryRound::Ceil => RoundMode::Up,
            UnaryRound::Floor => RoundMode::Down,
            UnaryRound::Trunc => RoundMode::TowardsZero,
            UnaryRound::Round => requested,
        }
    }
}

/// Rounds every valid element of `array` to an integral value.
///
/// The output has the input's length, type and validity bitmap. Integer inputs
/// are returned unchanged since they have no fractional part.
pub fn round_unary<T>(
    array: &PrimitiveArray<T>,
    op: UnaryRound,
    mode: RoundMode,
    parallelism: &ParallelismConfig,
) -> PrimitiveArray<T>
where
    T: ArrowPrimitiveType,
    T::Native: RoundNative,
{
    if <T::Native as RoundNative>::INTEGRAL {
        return array.clone();
    }

    let mode = op.effective_mode(mode);
    log::trace!(
        "round_unary: {:?} on {} ({} rows, mode {})",
        op,
        T::DATA_TYPE,
        array.len(),
        mode
    );

    let values = map_valid(array.values(), array.nulls(), parallelism, |_, v| {
        v.round_digits(0, mode)
    });
    PrimitiveArray::<T>::new(values.into(), propagate_unary(array.nulls()))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float32Array, Float64Array, Int8Array, UInt64Array};

    fn serial() -> ParallelismConfig {
        ParallelismConfig {
            enabled: false,
            ..ParallelismConfig::default()
        }
    }

    #[test]
    fn test_effective_mode() {
        for mode in RoundMode::ALL {
            assert_eq!(UnaryRound::Ceil.effective_mode(mode), RoundMode::Up);
            assert_eq!(UnaryRound::Floor.effective_mode(mode), RoundMode::Down);
            assert_eq!(UnaryRound::Trunc.effective_mode(mode), RoundMode::TowardsZero);
            assert_eq!(UnaryRound::Round.effective_mode(mode), mode);
        }
    }

    #[test]
    fn test_ceil_floor_trunc_ignore_requested_mode() {
        let input = Float64Array::from(vec![-1.5, -0.2, 0.2, 1.5]);
        for mode in RoundMode::ALL {
            let ceil = round_unary(&input, UnaryRound::Ceil, mode, &serial());
            let floor = round_unary(&input, UnaryRound::Floor, mode, &serial());
            let trunc = round_unary(&input, UnaryRound::Trunc, mode, &serial());
            assert_eq!(&ceil.values()[..], &[-1.0, -0.0, 1.0, 2.0]);
            assert_eq!(&floor.values()[..], &[-2.0, -1.0, 0.0, 1.0]);
            assert_eq!(&trunc.values()[..], &[-1.0, -0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_round_half_modes_f32() {
        let input = Float32Array::from(vec![2.5, 3.5, -2.5]);
        let even = round_unary(&input, UnaryRound::Round, RoundMode::HalfToEven, &serial());
        assert_eq!(even, Float32Array::from(vec![2.0, 4.0, -2.0]));
        let odd = round_unary(&input, UnaryRound::Round, RoundMode::HalfToOdd, &serial());
        assert_eq!(odd, Float32Array::from(vec![3.0, 3.0, -3.0]));
    }

    #[test]
    fn test_nulls_propagate_unchanged() {
        let input = Float64Array::from(vec![Some(1.4), None, Some(-7.6), None]);
        let out = round_unary(&input, UnaryRound::Round, RoundMode::HalfUp, &serial());
        assert_eq!(out, Float64Array::from(vec![Some(1.0), None, Some(-8.0), None]));
        assert_eq!(out.nulls(), input.nulls());
    }

    #[test]
    fn test_integers_are_identity() {
        let input = Int8Array::from(vec![Some(i8::MIN), None, Some(-1), Some(i8::MAX)]);
        for op in [UnaryRound::Ceil, UnaryRound::Floor, UnaryRound::Round, UnaryRound::Trunc] {
            for mode in RoundMode::ALL {
                assert_eq!(round_unary(&input, op, mode, &serial()), input);
            }
        }
        let input = UInt64Array::from(vec![0, u64::MAX]);
        assert_eq!(round_unary(&input, UnaryRound::Ceil, RoundMode::Up, &serial()), input);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let values: Vec<Option<f64>> = (0..10_000)
            .map(|i| if i % 13 == 0 { None } else { Some(i as f64 / 4.0 - 1_000.0) })
            .collect();
        let input = Float64Array::from(values);
        let parallel = ParallelismConfig {
            enabled: true,
            min_parallel_len: 0,
            min_chunk_len: 64,
        };
        for mode in RoundMode::ALL {
            let a = round_unary(&input, UnaryRound::Round, mode, &serial());
            let b = round_unary(&input, UnaryRound::Round, mode, &parallel);
            assert_eq!(a, b);
        }
    }
}
