// ABOUTME: Step duration tagged union: extent by distance or by elapsed time
// ABOUTME: Exactly one variant is active; derived step fields resolve from it plus the pace target
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use rust_decimal::Decimal;

use super::distance::DistanceMetric;

/// How far a step extends: over a fixed distance or a fixed time.
///
/// A step resolves its covered distance and estimated time from this variant
/// together with the step's pace target, never independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDuration {
    /// The step covers a fixed distance
    Distance {
        /// Magnitude in `metric` units
        value: Decimal,
        /// Unit of `value`
        metric: DistanceMetric,
    },
    /// The step lasts a fixed time
    Time {
        /// Elapsed time of the step
        value: chrono::Duration,
    },
}

impl StepDuration {
    /// A distance-based duration in kilometers
    #[must_use]
    pub const fn kilometers(value: Decimal) -> Self {
        Self::Distance {
            value,
            metric: DistanceMetric::Kilometers,
        }
    }

    /// A time-based duration
    #[must_use]
    pub const fn time(value: chrono::Duration) -> Self {
        Self::Time { value }
    }

    /// Whether the extent is expressed as a distance
    #[must_use]
    pub const fn is_distance_based(&self) -> bool {
        matches!(self, Self::Distance { .. })
    }

    /// The distance metric, for distance-based durations
    #[must_use]
    pub const fn distance_metric(&self) -> Option<DistanceMetric> {
        match self {
            Self::Distance { metric, .. } => Some(*metric),
            Self::Time { .. } => None,
        }
    }
}
