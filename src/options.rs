// In: src/options.rs

//! Typed options carried alongside every rounding call.
//!
//! `RoundMode` is the closed set of tie-break/direction policies. The two
//! options structs each carry nothing but the active mode; for `round_binary`
//! the digit counts travel as a second input array so they can vary per row.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;

//==================================================================================
// I. RoundMode
//==================================================================================

/// How to resolve the direction, and break ties, at a rounding boundary.
///
/// The discriminants follow the compute engine's enum order so that integer
/// encodings coming from other layers map one-to-one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundMode {
    /// Round toward negative infinity (floor).
    Down = 0,
    /// Round toward positive infinity (ceiling).
    Up = 1,
    /// Drop the fractional part (truncation).
    TowardsZero = 2,
    /// Round away from zero.
    TowardsInfinity = 3,
    /// Nearest; ties toward negative infinity.
    HalfDown = 4,
    /// Nearest; ties toward positive infinity.
    HalfUp = 5,
    /// Nearest; ties toward zero.
    HalfTowardsZero = 6,
    /// Nearest; ties away from zero.
    HalfTowardsInfinity = 7,
    /// Nearest; ties to the even neighbour (banker's rounding).
    #[default]
    HalfToEven = 8,
    /// Nearest; ties to the odd neighbour.
    HalfToOdd = 9,
}

/// One of the two multiples of the granularity that bracket an inexact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Neighbor {
    Lower,
    Upper,
}

impl RoundMode {
    /// Every mode, in enum order.
    pub const ALL: [RoundMode; 10] = [
        RoundMode::Down,
        RoundMode::Up,
        RoundMode::TowardsZero,
        RoundMode::TowardsInfinity,
        RoundMode::HalfDown,
        RoundMode::HalfUp,
        RoundMode::HalfTowardsZero,
        RoundMode::HalfTowardsInfinity,
        RoundMode::HalfToEven,
        RoundMode::HalfToOdd,
    ];

    /// Returns `true` for the modes that round to nearest and only use their
    /// policy to break exact ties.
    pub fn is_half(&self) -> bool {
        matches!(
            self,
            RoundMode::HalfDown
                | RoundMode::HalfUp
                | RoundMode::HalfTowardsZero
                | RoundMode::HalfTowardsInfinity
                | RoundMode::HalfToEven
                | RoundMode::HalfToOdd
        )
    }

    /// The canonical snake_case name, e.g. `"half_to_even"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundMode::Down => "down",
            RoundMode::Up => "up",
            RoundMode::TowardsZero => "towards_zero",
            RoundMode::TowardsInfinity => "towards_infinity",
            RoundMode::HalfDown => "half_down",
            RoundMode::HalfUp => "half_up",
            RoundMode::HalfTowardsZero => "half_towards_zero",
            RoundMode::HalfTowardsInfinity => "half_towards_infinity",
            RoundMode::HalfToEven => "half_to_even",
            RoundMode::HalfToOdd => "half_to_odd",
        }
    }

    /// Picks the neighbouring multiple for an inexact value.
    ///
    /// * `negative`: sign of the value being rounded.
    /// * `half`: the remainder above the lower neighbour compared against half
    ///   a granularity step.
    /// * `lower_is_even`: parity of the lower neighbour's quotient.
    ///
    /// Must only be called when the value is not already a multiple.
    pub(crate) fn select(&self, negative: bool, half: Ordering, lower_is_even: bool) -> Neighbor {
        let toward_zero = if negative {
            Neighbor::Upper
        } else {
            Neighbor::Lower
        };
        let away_from_zero = if negative {
            Neighbor::Lower
        } else {
            Neighbor::Upper
        };

        match self {
            RoundMode::Down => Neighbor::Lower,
            RoundMode::Up => Neighbor::Upper,
            RoundMode::TowardsZero => toward_zero,
            RoundMode::TowardsInfinity => away_from_zero,
            _ => match half {
                Ordering::Less => Neighbor::Lower,
                Ordering::Greater => Neighbor::Upper,
                Ordering::Equal => match self {
                    RoundMode::HalfDown => Neighbor::Lower,
                    RoundMode::HalfUp => Neighbor::Upper,
                    RoundMode::HalfTowardsZero => toward_zero,
                    RoundMode::HalfTowardsInfinity => away_from_zero,
                    RoundMode::HalfToEven if lower_is_even => Neighbor::Lower,
                    RoundMode::HalfToEven => Neighbor::Upper,
                    RoundMode::HalfToOdd if lower_is_even => Neighbor::Upper,
                    _ => Neighbor::Lower,
                },
            },
        }
    }
}

impl TryFrom<i32> for RoundMode {
    type Error = ComputeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| RoundMode::ALL.get(idx).copied())
            .ok_or_else(|| {
                ComputeError::InvalidOption(format!(
                    "round_mode must be in 0..={}, got {}",
                    RoundMode::ALL.len() - 1,
                    value
                ))
            })
    }
}

impl FromStr for RoundMode {
    type Err = ComputeError;

    /// Accepts the snake_case names as well as their upper-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RoundMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == lowered)
            .ok_or_else(|| ComputeError::InvalidOption(format!("unknown round_mode '{}'", s)))
    }
}

impl fmt::Display for RoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==================================================================================
// II. Options Objects
//==================================================================================

/// Options for `ceil`, `floor`, `round` and `trunc`.
///
/// Only `round` honours `round_mode`; the other three always use their
/// implied direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOptions {
    #[serde(default)]
    pub round_mode: RoundMode,
}

impl RoundOptions {
    pub fn new(round_mode: RoundMode) -> Self {
        Self { round_mode }
    }
}

/// Options for `round_binary`. The digit counts are the second input array.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundBinaryOptions {
    #[serde(default)]
    pub round_mode: RoundMode,
}

impl RoundBinaryOptions {
    pub fn new(round_mode: RoundMode) -> Self {
        Self { round_mode }
    }
}

/// The options object passed through the registry to the selected kernel.
///
/// Any variant is accepted by any rounding function; kernels read only the
/// fields they need.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FunctionOptions {
    Round(RoundOptions),
    RoundBinary(RoundBinaryOptions),
}

impl FunctionOptions {
    /// The mode carried by either variant.
    pub fn round_mode(&self) -> RoundMode {
        match self {
            FunctionOptions::Round(opts) => opts.round_mode,
            FunctionOptions::RoundBinary(opts) => opts.round_mode,
        }
    }

    /// Parses an options object such as `{"kind": "round", "round_mode": "half_up"}`.
    ///
    /// A `round_mode` given as an integer uses the enum order of [`RoundMode`].
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ComputeError> {
        let mut value = value.clone();
        if let Some(mode) = value.get("round_mode").and_then(|m| m.as_i64()) {
            let mode = i32::try_from(mode)
                .map_err(|_| {
                    ComputeError::InvalidOption(format!("round_mode {} out of range", mode))
                })
                .and_then(RoundMode::try_from)?;
            value["round_mode"] = serde_json::Value::String(mode.as_str().to_string());
        }
        serde_json::from_value(value).map_err(|e| ComputeError::InvalidOption(e.to_string()))
    }
}

impl From<RoundOptions> for FunctionOptions {
    fn from(opts: RoundOptions) -> Self {
        FunctionOptions::Round(opts)
    }
}

impl From<RoundBinaryOptions> for FunctionOptions {
    fn from(opts: RoundBinaryOptions) -> Self {
        FunctionOptions::RoundBinary(opts)
    }
}

//==================================================================================
// III. Unit Tests
//==================================================================================
