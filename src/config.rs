// In: src/config.rs

//! The single source of truth for all compute-engine configuration.
//!
//! This module defines the unified `ComputeConfig` struct, which is designed to be
//! created once at the application boundary (e.g., from a JSON document) and then
//! passed down through the system via a shared, read-only `Arc<ComputeConfig>`
//! owned by the `FunctionRegistry`.
//!
//! Nothing here changes rounding results. It only controls how an invocation
//! is executed.

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;

//==================================================================================
// I. Parallel Execution
//==================================================================================

/// Controls chunked, multi-threaded execution of a single kernel invocation.
///
/// Element-wise rounding has no cross-element dependency, so long arrays are
/// split into chunks processed on the rayon pool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ParallelismConfig {
    /// Master switch. When false every kernel runs on the calling thread.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Arrays shorter than this are always processed on the calling thread.
    #[serde(default = "default_min_parallel_len")]
    pub min_parallel_len: usize,

    /// The smallest chunk a worker thread is handed.
    #[serde(default = "default_min_chunk_len")]
    pub min_chunk_len: usize,
}

impl ParallelismConfig {
    /// Returns `true` if an input of `len` elements should be chunked across threads.
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.enabled && len >= self.min_parallel_len && len > self.min_chunk_len
    }
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_parallel_len: default_min_parallel_len(),
            min_chunk_len: default_min_chunk_len(),
        }
    }
}

//==================================================================================
// II. The Unified ComputeConfig
//==================================================================================

/// The single, unified configuration for kernel execution.
/// This struct is created once and shared throughout the system via an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ComputeConfig {
    /// How a single invocation may be split across threads.
    #[serde(default)]
    pub parallelism: ParallelismConfig,
}

impl ComputeConfig {
    /// A configuration that keeps every invocation on the calling thread.
    pub fn single_threaded() -> Self {
        Self {
            parallelism: ParallelismConfig {
                enabled: false,
                ..ParallelismConfig::default()
            },
        }
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ComputeError> {
        let config: ComputeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot be executed.
    pub fn validate(&self) -> Result<(), ComputeError> {
        if self.parallelism.min_chunk_len == 0 {
            return Err(ComputeError::InvalidConfig(
                "parallelism.min_chunk_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// Helper for `serde` to provide a default for `min_parallel_len`.
fn default_min_parallel_len() -> usize {
    65_536
}

/// Helper for `serde` to provide a default for `min_chunk_len`.
fn default_min_chunk_len() -> usize {
    8_192
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ComputeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ComputeConfig::default());
        assert!(config.parallelism.enabled);
        assert_eq!(config.parallelism.min_parallel_len, 65_536);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            ComputeConfig::from_json_str(r#"{"parallelism": {"min_chunk_len": 1024}}"#).unwrap();
        assert_eq!(config.parallelism.min_chunk_len, 1024);
        assert!(config.parallelism.enabled);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = ComputeConfig::from_json_str(r#"{"parallelism": {"min_chunk_len": 0}}"#);
        assert!(matches!(result, Err(ComputeError::InvalidConfig(_))));

        let result = ComputeConfig::from_json_str("not json");
        assert!(matches!(result, Err(ComputeError::SerdeJson(_))));
    }

    #[test]
    fn test_should_parallelize() {
        let p = ParallelismConfig::default();
        assert!(!p.should_parallelize(1_000));
        assert!(p.should_parallelize(100_000));
        assert!(!ComputeConfig::single_threaded().parallelism.should_parallelize(1 << 24));
    }
}
