use std::cmp::Ordering;

use arrow::array::PrimitiveArray;
use arrow::datatypes::ArrowPrimitiveType;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ComputeError;
use crate::null_handling::build_array;

/// The seed the benchmarks use.
pub const DEFAULT_SEED: u64 = 0x9437_8165;

/// Produces random primitive arrays with a controlled share of nulls.
#[derive(Debug, Clone)]
pub struct RandomArrayGenerator {
    rng: StdRng,
}

impl RandomArrayGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `len` values drawn uniformly from `[min, max]`, each null with
    /// probability `null_probability`.
    ///
    /// With a probability of zero the array carries no validity bitmap at all.
    ///
    /// # Errors
    /// `ComputeError::InvalidOption` if `min > max` or the probability is not
    /// within `[0, 1]`.
    pub fn numeric<T>(
        &mut self,
        len: usize,
        min: T::Native,
        max: T::Native,
        null_probability: f64,
    ) -> Result<PrimitiveArray<T>, ComputeError>
    where
        T: ArrowPrimitiveType,
        T::Native: SampleUniform + PartialOrd,
    {
        if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
            return Err(ComputeError::InvalidOption(format!(
                "empty value range [{:?}, {:?}]",
                min, max
            )));
        }
        if !(0.0..=1.0).contains(&null_probability) {
            return Err(ComputeError::InvalidOption(format!(
                "null probability {} is outside [0, 1]",
                null_probability
            )));
        }

        let values: Vec<T::Native> = (0..len)
            .map(|_| self.rng.random_range(min..=max))
            .collect();
        let validity = if null_probability > 0.0 {
            Some(
                (0..len)
                    .map(|_| !self.rng.random_bool(null_probability))
                    .collect(),
            )
        } else {
            None
        };
        build_array::<T>(values, validity)
    }
}
