//! This module contains the function registry: the runtime entry point that
//! resolves a function name plus the types of its input arrays to one concrete,
//! type-specialized kernel and runs it.
//!
//! Resolution fails the whole call before any output is produced. The checks
//! run in a fixed order: the name, then the argument count, then the type
//! signature.
//!
//! A registry is immutable once built and is `Send + Sync`, so a single
//! instance can serve concurrent invocations.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef};

use crate::config::ComputeConfig;
use crate::error::ComputeError;
use crate::options::FunctionOptions;

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod function;
mod round_kernels;


pub use function::{FunctionName, KernelFn, KernelSignature, ScalarKernel};

//==================================================================================
// 2. The Registry
//==================================================================================

/// Maps each function to the kernels registered for it.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<FunctionName, Vec<ScalarKernel>>,
    config: Arc<ComputeConfig>,
}

impl FunctionRegistry {
    /// An empty registry. Every name is unknown until kernels are registered.
    pub fn new(config: Arc<ComputeConfig>) -> Self {
        Self {
            functions: HashMap::new(),
            config,
        }
    }

    /// A registry holding all five rounding functions for all ten numeric types.
    pub fn with_round_kernels(config: Arc<ComputeConfig>) -> Self {
        let mut registry = Self::new(config);
        round_kernels::register_round_kernels(&mut registry);
        log::debug!(
            "Registered rounding kernels for {} functions",
            registry.functions.len()
        );
        registry
    }

    /// Adds a kernel. A kernel with the same signature already registered for
    /// `name` is replaced.
    ///
    /// # Errors
    /// `ComputeError::ArityMismatch` if the kernel's signature does not have
    /// one input type per argument of `name`.
    pub fn register(
        &mut self,
        name: FunctionName,
        kernel: ScalarKernel,
    ) -> Result<(), ComputeError> {
        if kernel.signature.len() != name.arity() {
            return Err(ComputeError::ArityMismatch {
                function: name.to_string(),
                expected: name.arity(),
                actual: kernel.signature.len(),
            });
        }
        self.insert(name, kernel);
        Ok(())
    }

    /// Adds a kernel whose signature is known to match the arity of `name`.
    pub(crate) fn insert(&mut self, name: FunctionName, kernel: ScalarKernel) {
        let kernels = self.functions.entry(name).or_default();
        if let Some(existing) = kernels
            .iter_mut()
            .find(|k| k.signature == kernel.signature)
        {
            log::warn!(
                "Replacing kernel {}{} already present in the registry",
                name,
                kernel.signature
            );
            *existing = kernel;
        } else {
            kernels.push(kernel);
        }
    }

    pub fn contains(&self, name: FunctionName) -> bool {
        self.functions.contains_key(&name)
    }

    /// The registered function names, in a stable order.
    pub fn function_names(&self) -> Vec<FunctionName> {
        let mut names: Vec<FunctionName> = self.functions.keys().copied().collect();
        names.sort();
        names
    }

    /// The kernels registered for `name`; empty if it is not registered.
    pub fn kernels(&self, name: FunctionName) -> &[ScalarKernel] {
        self.functions.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves `name` against the runtime types of `inputs` and runs the
    /// matching kernel.
    ///
    /// `options` of `None` means the function's defaults. Either options
    /// variant is accepted by every function; only its rounding mode is read.
    ///
    /// # Errors
    /// * `UnknownFunction` if `name` is not registered.
    /// * `ArityMismatch` if the number of inputs is wrong for `name`.
    /// * `TypeMismatch` if no kernel accepts the inputs' types.
    /// * Any error the kernel itself reports, e.g. `LengthMismatch`.
    pub fn invoke(
        &self,
        name: &str,
        inputs: &[ArrayRef],
        options: Option<&FunctionOptions>,
    ) -> Result<ArrayRef, ComputeError> {
        let function: FunctionName = name.parse()?;
        let kernels = self
            .functions
            .get(&function)
            .ok_or_else(|| ComputeError::UnknownFunction(name.to_string()))?;

        if inputs.len() != function.arity() {
            return Err(ComputeError::ArityMismatch {
                function: function.to_string(),
                expected: function.arity(),
                actual: inputs.len(),
            });
        }

        let type_mismatch = || ComputeError::TypeMismatch {
            function: function.to_string(),
            types: inputs
                .iter()
                .map(|a| a.data_type().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        };
        let signature = KernelSignature::of_inputs(inputs).map_err(|_| type_mismatch())?;
        let kernel = kernels
            .iter()
            .find(|k| k.signature == signature)
            .ok_or_else(type_mismatch)?;

        let defaults;
        let options = match options {
            Some(options) => options,
            None => {
                defaults = function.default_options();
                &defaults
            }
        };

        let rows = inputs[0].len();
        log::debug!(
            "Invoking {}{} on {} rows with mode {}",
            function,
            signature,
            rows,
            options.round_mode()
        );
        crate::log_metric!(
            "event"="invoke",
            "function"=function,
            "signature"=&signature,
            "round_mode"=options.round_mode(),
            "rows"=rows
        );

        (kernel.exec)(inputs, options, &self.config)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_round_kernels(Arc::new(ComputeConfig::default()))
    }
}
