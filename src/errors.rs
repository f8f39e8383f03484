// ABOUTME: Typed failure families for workout construction and calculation
// ABOUTME: Invalid-parameter, workout-generation, and calculation errors as data-bearing values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::WorkoutType;

/// Errors produced while building workouts or deriving their metrics.
///
/// All variants are programmer-error-class failures surfaced synchronously to
/// the caller; none are retried and none carry partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// An input value failed a structural precondition.
    #[error("invalid value '{value}' for parameter '{parameter}'")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value, rendered for diagnostics
        value: String,
    },

    /// The builder could not produce a valid workout from its accumulated state.
    #[error("workout generation failed: {reason}")]
    Generation {
        /// The attempted workout type, where one was set
        workout_type: Option<WorkoutType>,
        /// What was missing or inconsistent
        reason: String,
    },

    /// A numeric derivation over a distance/time pair produced no usable value.
    #[error("calculation failed for distance {distance} km over {time}")]
    Calculation {
        /// Distance side of the offending pair, in the step's unit
        distance: Decimal,
        /// Time side of the offending pair
        time: Duration,
    },
}

impl WorkoutError {
    /// Create an invalid-parameter error
    #[must_use]
    pub fn invalid_parameter(parameter: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.into(),
        }
    }

    /// Create a workout-generation error
    #[must_use]
    pub fn generation(workout_type: Option<WorkoutType>, reason: impl Into<String>) -> Self {
        Self::Generation {
            workout_type,
            reason: reason.into(),
        }
    }

    /// Create a calculation error carrying the offending distance/time pair
    #[must_use]
    pub const fn calculation(distance: Decimal, time: Duration) -> Self {
        Self::Calculation { distance, time }
    }

    /// The workout type this error relates to, when known
    #[must_use]
    pub const fn workout_type(&self) -> Option<WorkoutType> {
        match self {
            Self::Generation { workout_type, .. } => *workout_type,
            Self::InvalidParameter { .. } | Self::Calculation { .. } => None,
        }
    }
}
