// ABOUTME: Intensity targets for workout steps, primarily pace ranges
// ABOUTME: Tagged union kept extensible for heart-rate and effort targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A minimum and maximum time-per-kilometer defining a pace band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceRange {
    min: Duration,
    max: Duration,
}

impl PaceRange {
    /// A pace band from explicit per-kilometer durations
    #[must_use]
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// A pace band from whole seconds per kilometer
    #[must_use]
    pub fn from_seconds(min_seconds: i64, max_seconds: i64) -> Self {
        Self::new(
            Duration::seconds(min_seconds),
            Duration::seconds(max_seconds),
        )
    }

    /// Fastest bound (lowest time per kilometer)
    #[must_use]
    pub const fn min(&self) -> Duration {
        self.min
    }

    /// Slowest bound (highest time per kilometer)
    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Midpoint of the band, used wherever a single pace is needed
    #[must_use]
    pub fn average(&self) -> Duration {
        (self.min + self.max) / 2
    }
}

/// Discriminant of an [`IntensityTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTargetType {
    /// Time-per-kilometer band
    Pace,
    /// Heart-rate band in beats per minute
    HeartRate,
    /// Perceived-effort level
    Effort,
    /// No target
    Open,
}

impl IntensityTargetType {
    /// Every target type, for completeness checks
    pub const ALL: [Self; 4] = [Self::Pace, Self::HeartRate, Self::Effort, Self::Open];

    /// Display label for this target type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pace => "Pace",
            Self::HeartRate => "Heart Rate",
            Self::Effort => "Effort",
            Self::Open => "Open",
        }
    }
}

/// The intensity a step is meant to be executed at.
///
/// Pace is the only variant exercised by the current construction paths; the
/// other variants keep the union extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityTarget {
    /// Target pace band per kilometer
    Pace(PaceRange),
    /// Target heart-rate band
    HeartRate {
        /// Lower bound in beats per minute
        min: u32,
        /// Upper bound in beats per minute
        max: u32,
    },
    /// Target perceived-effort level (1-10)
    Effort {
        /// Effort level on a 1-10 scale
        level: u8,
    },
    /// No intensity target
    Open,
}

impl IntensityTarget {
    /// A pace target from a pace band
    #[must_use]
    pub const fn pace(range: PaceRange) -> Self {
        Self::Pace(range)
    }

    /// The discriminant of this target
    #[must_use]
    pub const fn target_type(&self) -> IntensityTargetType {
        match self {
            Self::Pace(_) => IntensityTargetType::Pace,
            Self::HeartRate { .. } => IntensityTargetType::HeartRate,
            Self::Effort { .. } => IntensityTargetType::Effort,
            Self::Open => IntensityTargetType::Open,
        }
    }

    /// The pace band, when this is a pace target
    #[must_use]
    pub const fn pace_range(&self) -> Option<PaceRange> {
        match self {
            Self::Pace(range) => Some(*range),
            Self::HeartRate { .. } | Self::Effort { .. } | Self::Open => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn average_is_the_midpoint() {
        let range = PaceRange::from_seconds(300, 360);
        assert_eq!(range.average(), Duration::seconds(330));
    }

    #[test]
    fn pace_range_is_only_exposed_for_pace_targets() {
        let pace = IntensityTarget::pace(PaceRange::from_seconds(240, 250));
        assert!(pace.pace_range().is_some());
        assert_eq!(pace.target_type(), IntensityTargetType::Pace);

        let hr = IntensityTarget::HeartRate { min: 120, max: 140 };
        assert!(hr.pace_range().is_none());
        assert_eq!(hr.target_type(), IntensityTargetType::HeartRate);
    }
}
