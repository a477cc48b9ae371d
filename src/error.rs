// In: src/error.rs

//! This module defines the single, unified error type for the entire round_kernels library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Numeric edge cases (NaN, Inf, saturation at type bounds) are never errors:
//! they are defined kernel outcomes. Everything here fails the whole call before
//! any output array is produced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComputeError {
    // =========================================================================
    // === Dispatch Errors (name + type signature resolution)
    // =========================================================================
    #[error("Unknown function: '{0}'")]
    UnknownFunction(String),

    #[error("No kernel of '{function}' matches input types ({types})")]
    TypeMismatch { function: String, types: String },

    #[error("Function '{function}' accepts {expected} argument(s) but {actual} were passed")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    // =========================================================================
    // === Kernel Input Errors
    // =========================================================================
    #[error("Length mismatch: {values} values but {digits} digit counts")]
    LengthMismatch { values: usize, digits: usize },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Validity bitmap covers {bitmap} slots but the array has {array}")]
    InvalidValidity { bitmap: usize, array: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the Arrow library.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the Serde JSON library, typically while parsing options or config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error from the I/O subsystem, e.g. opening a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
