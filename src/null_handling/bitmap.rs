// --- IN: src/null_handling/bitmap.rs ---

//! Stateless helpers for carrying Arrow validity bitmaps from kernel inputs to
//! kernel outputs. They use the official `NullBuffer` type throughout; an absent
//! buffer means "all valid".

use arrow::array::PrimitiveArray;
use arrow::buffer::{NullBuffer, ScalarBuffer};
use arrow::datatypes::ArrowPrimitiveType;
use rayon::prelude::*;

use crate::config::ParallelismConfig;
use crate::error::ComputeError;

//==================================================================================
// 1. Bitmap Propagation
//==================================================================================

/// Output validity of a unary kernel: the input bitmap, unchanged.
pub fn propagate_unary(nulls: Option<&NullBuffer>) -> Option<NullBuffer> {
    nulls.cloned()
}

/// Output validity of a binary kernel: valid only where both inputs are valid.
///
/// Returns `None` when neither side carries a bitmap.
pub fn combine_binary(lhs: Option<&NullBuffer>, rhs: Option<&NullBuffer>) -> Option<NullBuffer> {
    NullBuffer::union(lhs, rhs)
}

//==================================================================================
// 2. Null-Skipping Element Map
//==================================================================================

/// Applies `f(index, value)` to every valid slot of `values`.
///
/// Null slots are filled with `U::default()` without calling `f`. Long inputs
/// are split into chunks on the rayon pool; element `i` of the output always
/// corresponds to element `i` of the input.
pub fn map_valid<T, U, F>(
    values: &[T],
    nulls: Option<&NullBuffer>,
    parallelism: &ParallelismConfig,
    f: F,
) -> Vec<U>
where
    T: Copy + Sync,
    U: Default + Send,
    F: Fn(usize, T) -> U + Sync + Send,
{
    let apply = |(i, &value): (usize, &T)| match nulls {
        Some(nb) if nb.is_null(i) => U::default(),
        _ => f(i, value),
    };

    if parallelism.should_parallelize(values.len()) {
        log::trace!(
            "map_valid: {} elements on the rayon pool (min chunk {})",
            values.len(),
            parallelism.min_chunk_len
        );
        values
            .par_iter()
            .enumerate()
            .with_min_len(parallelism.min_chunk_len)
            .map(apply)
            .collect()
    } else {
        values.iter().enumerate().map(apply).collect()
    }
}

//==================================================================================
// 3. Array Construction From Raw Parts
//==================================================================================

/// Builds a `PrimitiveArray` from dense values and an optional per-slot
/// validity vector (`true` == valid).
///
/// The validity vector may be longer than `values` (the extra bits are
/// ignored) but never shorter.
pub fn build_array<T: ArrowPrimitiveType>(
    values: Vec<T::Native>,
    validity: Option<Vec<bool>>,
) -> Result<PrimitiveArray<T>, ComputeError> {
    let num_rows = values.len();
    let nulls = match validity {
        Some(mut bits) => {
            if bits.len() < num_rows {
                return Err(ComputeError::InvalidValidity {
                    bitmap: bits.len(),
                    array: num_rows,
                });
            }
            bits.truncate(num_rows);
            Some(NullBuffer::from(bits))
        }
        None => None,
    };

    Ok(PrimitiveArray::<T>::try_new(ScalarBuffer::from(values), nulls)?)
}
