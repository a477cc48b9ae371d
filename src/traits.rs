//! This module defines the shared traits used across the rounding kernels.
//!
//! `RoundNative` is the per-element contract: round one native value to a
//! granularity of `10^-ndigits` under a `RoundMode`. It is implemented for the
//! ten Arrow native types by the macros at the bottom of this file, so a kernel
//! body written once over `T::Native: RoundNative` is instantiated per type.

use std::cmp::Ordering;

use arrow::datatypes::ArrowNativeType;
use num_traits::{Bounded, Float, NumCast, PrimInt};

use crate::options::{Neighbor, RoundMode};

/// Exponent past which every 64-bit integer lies below half a granularity step.
const MAX_INTEGER_POW10: u32 = 20;

/// Exponent past which every float power of ten is infinite.
const MAX_FLOAT_POW10: u32 = 400;

/// Exact powers of ten representable as `f64`.
const POW10_F64: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// A native element type the rounding kernels can operate on.
pub trait RoundNative: ArrowNativeType {
    /// `true` for integer types, which never carry a fractional part.
    const INTEGRAL: bool;

    /// Rounds to a multiple of `10^-ndigits` under `mode`.
    ///
    /// Never panics and never wraps: NaN and infinities pass through,
    /// results outside the type's range saturate to its bounds.
    fn round_digits(self, ndigits: i32, mode: RoundMode) -> Self;
}

/// Float types with a correctly rounded power-of-ten table.
pub(crate) trait FloatPow10: Float {
    fn pow10(exp: u32) -> Self;
}

//==================================================================================
// 1. Integer Rounding
//==================================================================================

/// Integer values have no fractional digits, so only negative `ndigits`
/// (tens, hundreds, ...) can move them.
pub(crate) fn round_integer<T>(val: T, ndigits: i32, mode: RoundMode) -> T
where
    T: PrimInt + Bounded + NumCast,
{
    if ndigits >= 0 {
        return val;
    }
    let Some(wide) = val.to_i128() else {
        return val;
    };

    let unit = 10i128.pow(ndigits.unsigned_abs().min(MAX_INTEGER_POW10));
    let quotient = wide.div_euclid(unit);
    let lower = quotient * unit;
    let remainder = wide - lower;
    if remainder == 0 {
        return val;
    }

    let rounded = match mode.select(wide < 0, (remainder * 2).cmp(&unit), quotient % 2 == 0) {
        Neighbor::Lower => lower,
        Neighbor::Upper => lower + unit,
    };
    saturate_from_i128(rounded)
}

fn saturate_from_i128<T: Bounded + NumCast>(wide: i128) -> T {
    <T as NumCast>::from(wide).unwrap_or_else(|| {
        if wide < 0 {
            T::min_value()
        } else {
            T::max_value()
        }
    })
}

//==================================================================================
// 2. Floating-Point Rounding
//==================================================================================

/// Rounds a float to `ndigits` decimal digits.
///
/// The value is scaled by `10^ndigits` (division for negative digits, which is
/// exact for representable powers), rounded to an integral neighbour, then
/// rescaled. A value already integral at the target scale is returned as-is,
/// which keeps repeated application stable.
pub(crate) fn round_float<T: FloatPow10>(val: T, ndigits: i32, mode: RoundMode) -> T {
    if !val.is_finite() || val.is_zero() {
        return val;
    }

    let pow = T::pow10(ndigits.unsigned_abs());
    let mut scaled = if ndigits >= 0 { val * pow } else { val / pow };
    if !scaled.is_finite() {
        // Finer than the type can express: nothing left to round.
        return val;
    }
    if scaled.is_zero() {
        // Underflowed: the value sits strictly between zero and one step.
        scaled = T::min_positive_value().copysign(val);
    }

    let lower = scaled.floor();
    let frac = scaled - lower;
    if frac.is_zero() {
        return val;
    }

    let two = T::one() + T::one();
    let half = frac.partial_cmp(&(T::one() / two)).unwrap_or(Ordering::Equal);
    let lower_is_even = (lower % two).is_zero();
    let rounded = match mode.select(val < T::zero(), half, lower_is_even) {
        Neighbor::Lower => lower,
        Neighbor::Upper => scaled.ceil(),
    };
    if rounded.is_zero() {
        // Keeps the sign of zero and avoids `0 * inf`.
        return rounded;
    }

    let out = if ndigits >= 0 {
        rounded / pow
    } else {
        rounded * pow
    };
    if out.is_finite() {
        out
    } else {
        T::max_value().copysign(out)
    }
}

//==================================================================================
// 3. Per-Type Implementations
//==================================================================================

macro_rules! impl_round_native_int {
    ($($T:ty),+ $(,)?) => {
        $(
            impl RoundNative for $T {
                const INTEGRAL: bool = true;

                #[inline]
                fn round_digits(self, ndigits: i32, mode: RoundMode) -> Self {
                    round_integer(self, ndigits, mode)
                }
            }
        )+
    };
}

macro_rules! impl_round_native_float {
    ($($T:ty),+ $(,)?) => {
        $(
            impl FloatPow10 for $T {
                #[inline]
                fn pow10(exp: u32) -> Self {
                    match POW10_F64.get(exp as usize) {
                        Some(p) => *p as $T,
                        None if exp > MAX_FLOAT_POW10 => <$T>::INFINITY,
                        None => (10.0 as $T).powi(exp as i32),
                    }
                }
            }

            impl RoundNative for $T {
                const INTEGRAL: bool = false;

                #[inline]
                fn round_digits(self, ndigits: i32, mode: RoundMode) -> Self {
                    round_float(self, ndigits, mode)
                }
            }
        )+
    };
}

impl_round_native_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_round_native_float!(f32, f64);

//==================================================================================
// 4. Unit Tests
//==================================================================================
