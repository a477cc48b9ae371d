//! Defines the typed vocabulary of the registry: function names, kernel
//! signatures and the kernel entry itself.
//!
//! Names arrive as strings at the boundary and are parsed once into
//! `FunctionName`; signatures are lists of `NumericType` tags, so resolution is
//! a match on tags rather than string comparison.

use std::fmt;
use std::str::FromStr;

use arrow::array::ArrayRef;
use serde::{Deserialize, Serialize};

use crate::config::ComputeConfig;
use crate::error::ComputeError;
use crate::options::{FunctionOptions, RoundBinaryOptions, RoundOptions};
use crate::types::NumericType;

//==================================================================================
// I. Function Names
//==================================================================================

/// Every function the rounding registry knows how to serve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FunctionName {
    Ceil,
    Floor,
    Round,
    Trunc,
    RoundBinary,
}

impl FunctionName {
    pub const ALL: [FunctionName; 5] = [
        FunctionName::Ceil,
        FunctionName::Floor,
        FunctionName::Round,
        FunctionName::Trunc,
        FunctionName::RoundBinary,
    ];

    /// The external name callers invoke the function by.
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionName::Ceil => "ceil",
            FunctionName::Floor => "floor",
            FunctionName::Round => "round",
            FunctionName::Trunc => "trunc",
            FunctionName::RoundBinary => "round_binary",
        }
    }

    /// Number of positional input arrays.
    pub fn arity(&self) -> usize {
        match self {
            FunctionName::RoundBinary => 2,
            _ => 1,
        }
    }

    /// Options used when the caller passes none.
    pub fn default_options(&self) -> FunctionOptions {
        match self {
            FunctionName::RoundBinary => RoundBinaryOptions::default().into(),
            _ => RoundOptions::default().into(),
        }
    }
}

impl FromStr for FunctionName {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ComputeError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==================================================================================
// II. Kernel Signatures
//==================================================================================

/// The ordered input types a kernel accepts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSignature(Vec<NumericType>);

impl KernelSignature {
    pub fn new(inputs: Vec<NumericType>) -> Self {
        Self(inputs)
    }

    /// Reads the runtime signature of a list of arrays.
    ///
    /// # Errors
    /// `ComputeError::TypeMismatch` if any input is not one of the ten numeric types.
    pub fn of_inputs(inputs: &[ArrayRef]) -> Result<Self, ComputeError> {
        inputs
            .iter()
            .map(|array| NumericType::from_arrow_type(array.data_type()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn inputs(&self) -> &[NumericType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KernelSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "({})", names.join(", "))
    }
}

//==================================================================================
// III. Kernel Entries
//==================================================================================

/// The calling convention every registered kernel implements.
///
/// Inputs have already been checked against the kernel's signature, so a
/// kernel may downcast them to its concrete array types.
pub type KernelFn =
    fn(&[ArrayRef], &FunctionOptions, &ComputeConfig) -> Result<ArrayRef, ComputeError>;

/// One concrete, type-specialized implementation of a function.
#[derive(Clone)]
pub struct ScalarKernel {
    pub signature: KernelSignature,
    pub exec: KernelFn,
}

impl ScalarKernel {
    pub fn new(inputs: Vec<NumericType>, exec: KernelFn) -> Self {
        Self {
            signature: KernelSignature::new(inputs),
            exec,
        }
    }
}

impl fmt::Debug for ScalarKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarKernel")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
