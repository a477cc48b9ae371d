//! This module provides the diagnostics hooks of the compute engine.
//!
//! Kernel resolution is the one decision point worth tracing: which function,
//! which signature, which mode, how many rows. The `log_metric!` macro emits
//! that as a single structured record through the `log` facade.
//!
//! The `#[cfg(debug_assertions)]` attribute compiles the macro body out of
//! release builds entirely.

/// Logs a structured key-value metric record at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use round_kernels::log_metric;
/// let rows = 1024;
/// log_metric!("event"="invoke", "function"="round", "rows"=&rows);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            ::log::debug!(
                target: "round_kernels::metric",
                "ROUND_METRIC: {{ {} }}",
                parts.join(", ")
            );
        }
    };
}
