//! Registers the rounding kernels: five functions, each instantiated once per
//! numeric element type.

use std::sync::Arc;

use arrow::array::{ArrayRef, AsArray, Int32Array, PrimitiveArray};
use arrow::datatypes::{ArrowPrimitiveType, Int32Type};

use super::function::{FunctionName, ScalarKernel};
use super::FunctionRegistry;
use crate::config::ComputeConfig;
use crate::error::ComputeError;
use crate::kernels::{round_binary, round_unary, UnaryRound};
use crate::options::FunctionOptions;
use crate::traits::RoundNative;
use crate::types::NumericType;

//==================================================================================
// 1. Kernel Entry Points
//==================================================================================

fn downcast<T: ArrowPrimitiveType>(array: &ArrayRef) -> Result<&PrimitiveArray<T>, ComputeError> {
    array.as_primitive_opt::<T>().ok_or_else(|| {
        ComputeError::InternalError(format!(
            "kernel for {} received a {} array",
            T::DATA_TYPE,
            array.data_type()
        ))
    })
}

fn exec_unary<T>(
    op: UnaryRound,
    inputs: &[ArrayRef],
    options: &FunctionOptions,
    config: &ComputeConfig,
) -> Result<ArrayRef, ComputeError>
where
    T: ArrowPrimitiveType,
    T::Native: RoundNative,
{
    let array = downcast::<T>(&inputs[0])?;
    let out = round_unary(array, op, options.round_mode(), &config.parallelism);
    Ok(Arc::new(out))
}

macro_rules! unary_entry {
    ($name:ident, $op:expr) => {
        fn $name<T>(
            inputs: &[ArrayRef],
            options: &FunctionOptions,
            config: &ComputeConfig,
        ) -> Result<ArrayRef, ComputeError>
        where
            T: ArrowPrimitiveType,
            T::Native: RoundNative,
        {
            exec_unary::<T>($op, inputs, options, config)
        }
    };
}

unary_entry!(exec_ceil, UnaryRound::Ceil);
unary_entry!(exec_floor, UnaryRound::Floor);
unary_entry!(exec_round, UnaryRound::Round);
unary_entry!(exec_trunc, UnaryRound::Trunc);

fn exec_round_binary<T>(
    inputs: &[ArrayRef],
    options: &FunctionOptions,
    config: &ComputeConfig,
) -> Result<ArrayRef, ComputeError>
where
    T: ArrowPrimitiveType,
    T::Native: RoundNative,
{
    let values = downcast::<T>(&inputs[0])?;
    let ndigits: &Int32Array = downcast::<Int32Type>(&inputs[1])?;
    let out = round_binary(values, ndigits, options.round_mode(), &config.parallelism)?;
    Ok(Arc::new(out))
}

//==================================================================================
// 2. Registration
//==================================================================================

/// Adds every rounding kernel to `registry`.
pub(crate) fn register_round_kernels(registry: &mut FunctionRegistry) {
    for numeric_type in NumericType::ALL {
        crate::with_match_numeric_type!(numeric_type, |T| {
            registry.insert(
                FunctionName::Ceil,
                ScalarKernel::new(vec![numeric_type], exec_ceil::<T>),
            );
            registry.insert(
                FunctionName::Floor,
                ScalarKernel::new(vec![numeric_type], exec_floor::<T>),
            );
            registry.insert(
                FunctionName::Round,
                ScalarKernel::new(vec![numeric_type], exec_round::<T>),
            );
            registry.insert(
                FunctionName::Trunc,
                ScalarKernel::new(vec![numeric_type], exec_trunc::<T>),
            );
            registry.insert(
                FunctionName::RoundBinary,
                ScalarKernel::new(vec![numeric_type, NumericType::Int32], exec_round_binary::<T>),
            );
        })
    }
}
