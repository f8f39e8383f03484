// ABOUTME: Atomic and composite workout steps with derived distance/time fields
// ABOUTME: SimpleStep, single-level Repeat groups, and the shared flattening primitive
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::distance::Distance;
use super::duration::StepDuration;
use super::intensity::IntensityTarget;
use crate::errors::WorkoutError;
use crate::units;

/// Role of a step within a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Easy opening segment
    WarmUp,
    /// Easy closing segment
    CoolDown,
    /// Quality running segment
    Run,
    /// Walking segment
    Walk,
    /// Active recovery between efforts
    Recover,
    /// Standing rest between efforts
    Rest,
}

impl StepType {
    /// Every step type, for completeness checks
    pub const ALL: [Self; 6] = [
        Self::WarmUp,
        Self::CoolDown,
        Self::Run,
        Self::Walk,
        Self::Recover,
        Self::Rest,
    ];

    /// Display label for this step type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WarmUp => "Warm Up",
            Self::CoolDown => "Cool Down",
            Self::Run => "Run",
            Self::Walk => "Walk",
            Self::Recover => "Recover",
            Self::Rest => "Rest",
        }
    }

    /// Whether this step type counts as a recovery segment
    #[must_use]
    pub const fn is_recovery(self) -> bool {
        matches!(self, Self::Walk | Self::Recover | Self::Rest)
    }
}

/// An atomic, non-repeating unit of a workout.
///
/// The distance/time fields are derived once at construction from the duration
/// variant and the pace target:
///
/// - distance-based duration: `total_distance` is the given distance,
///   `estimated_distance` is zero, `estimated_time` is distance times the
///   average pace;
/// - time-based duration: `estimated_time` is the given time,
///   `total_distance` is zero, `estimated_distance` is time divided by the
///   average pace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStep {
    step_type: StepType,
    duration: StepDuration,
    intensity_target: IntensityTarget,
    total_distance: Distance,
    estimated_distance: Distance,
    estimated_time: Duration,
}

impl SimpleStep {
    /// Build a step, deriving its distance and time fields.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::Calculation`] when the derivation degenerates:
    /// a zero average pace on a time-based step, or a time product outside the
    /// representable range.
    pub fn new(
        step_type: StepType,
        duration: StepDuration,
        intensity_target: IntensityTarget,
    ) -> Result<Self, WorkoutError> {
        match duration {
            StepDuration::Distance { value, metric } => {
                let estimated_time = estimate_time(value, &intensity_target)?;
                Ok(Self {
                    step_type,
                    duration,
                    intensity_target,
                    total_distance: Distance::new(value, metric),
                    estimated_distance: Distance::zero(),
                    estimated_time,
                })
            }
            StepDuration::Time { value } => {
                let estimated_km = estimate_distance(value, &intensity_target)?;
                Ok(Self {
                    step_type,
                    duration,
                    intensity_target,
                    total_distance: Distance::zero(),
                    estimated_distance: Distance::kilometers(estimated_km),
                    estimated_time: value,
                })
            }
        }
    }

    /// Role of this step
    #[must_use]
    pub const fn step_type(&self) -> StepType {
        self.step_type
    }

    /// Extent of this step as given at construction
    #[must_use]
    pub const fn duration(&self) -> StepDuration {
        self.duration
    }

    /// Intensity the step targets
    #[must_use]
    pub const fn intensity_target(&self) -> IntensityTarget {
        self.intensity_target
    }

    /// Distance fixed by a distance-based duration (zero otherwise)
    #[must_use]
    pub const fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Distance estimated from a time-based duration (zero otherwise)
    #[must_use]
    pub const fn estimated_distance(&self) -> Distance {
        self.estimated_distance
    }

    /// Time this step is expected to take
    #[must_use]
    pub const fn estimated_time(&self) -> Duration {
        self.estimated_time
    }

    /// The step's resolved distance: fixed plus estimated magnitude.
    ///
    /// Exactly one of the two is non-zero for any given duration variant.
    #[must_use]
    pub fn covered_distance(&self) -> Decimal {
        self.total_distance.value() + self.estimated_distance.value()
    }
}

/// Time to cover `distance` at the target's average pace.
fn estimate_time(
    distance: Decimal,
    intensity_target: &IntensityTarget,
) -> Result<Duration, WorkoutError> {
    let Some(range) = intensity_target.pace_range() else {
        return Ok(Duration::zero());
    };
    let pace_seconds = units::duration_to_seconds(range.average());
    let total_seconds = pace_seconds
        .checked_mul(distance)
        .ok_or_else(|| WorkoutError::calculation(distance, Duration::zero()))?;
    units::seconds_to_duration(total_seconds)
        .ok_or_else(|| WorkoutError::calculation(distance, Duration::zero()))
}

/// Kilometers covered in `time` at the target's average pace.
fn estimate_distance(
    time: Duration,
    intensity_target: &IntensityTarget,
) -> Result<Decimal, WorkoutError> {
    let Some(range) = intensity_target.pace_range() else {
        return Ok(Decimal::ZERO);
    };
    let pace_seconds = units::duration_to_seconds(range.average());
    let time_seconds = units::duration_to_seconds(time);
    time_seconds
        .checked_div(pace_seconds)
        .ok_or_else(|| WorkoutError::calculation(Decimal::ZERO, time))
}

/// N repetitions of a fixed short sequence of simple steps.
///
/// Holds one repetition unit (e.g. one run/recover pair); flattening expands
/// it `repetition_count` times. The element type is [`SimpleStep`], so repeat
/// groups cannot nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    repetition_count: u32,
    steps: Vec<SimpleStep>,
}

impl Repeat {
    /// Build a repeat group.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidParameter`] when `repetition_count` is
    /// zero.
    pub fn new(repetition_count: u32, steps: Vec<SimpleStep>) -> Result<Self, WorkoutError> {
        if repetition_count == 0 {
            return Err(WorkoutError::invalid_parameter(
                "repetition_count",
                repetition_count.to_string(),
            ));
        }
        Ok(Self {
            repetition_count,
            steps,
        })
    }

    /// How many times the unit repeats
    #[must_use]
    pub const fn repetition_count(&self) -> u32 {
        self.repetition_count
    }

    /// The repetition unit
    #[must_use]
    pub fn steps(&self) -> &[SimpleStep] {
        &self.steps
    }
}

/// A workout step: atomic or repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A single step
    Simple(SimpleStep),
    /// A repeated group of steps
    Repeat(Repeat),
}

/// Expand every repeat group into back-to-back copies of its unit, in order.
///
/// Simple steps pass through unchanged. The result is recomputed fresh on
/// every call; an empty input yields an empty output.
#[must_use]
pub fn flatten(steps: &[Step]) -> Vec<&SimpleStep> {
    let mut flat = Vec::new();
    for step in steps {
        match step {
            Step::Simple(simple) => flat.push(simple),
            Step::Repeat(repeat) => {
                for _ in 0..repeat.repetition_count() {
                    flat.extend(repeat.steps().iter());
                }
            }
        }
    }
    flat
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::intensity::PaceRange;
    use rust_decimal_macros::dec;

    fn run_step(km: Decimal) -> SimpleStep {
        SimpleStep::new(
            StepType::Run,
            StepDuration::kilometers(km),
            IntensityTarget::pace(PaceRange::from_seconds(300, 360)),
        )
        .unwrap()
    }

    #[test]
    fn distance_based_step_derives_time_from_average_pace() {
        let step = run_step(dec!(10));
        assert_eq!(step.estimated_time(), Duration::seconds(3300));
        assert_eq!(step.total_distance().value(), dec!(10));
        assert_eq!(step.estimated_distance().value(), Decimal::ZERO);
        assert_eq!(step.covered_distance(), dec!(10));
    }

    #[test]
    fn time_based_step_derives_distance_from_average_pace() {
        let step = SimpleStep::new(
            StepType::Run,
            StepDuration::time(Duration::minutes(30)),
            IntensityTarget::pace(PaceRange::from_seconds(300, 300)),
        )
        .unwrap();
        assert_eq!(step.estimated_time(), Duration::minutes(30));
        assert_eq!(step.total_distance().value(), Decimal::ZERO);
        assert_eq!(step.estimated_distance().value(), dec!(6));
    }

    #[test]
    fn zero_pace_on_time_based_step_is_a_calculation_error() {
        let err = SimpleStep::new(
            StepType::Run,
            StepDuration::time(Duration::minutes(30)),
            IntensityTarget::pace(PaceRange::from_seconds(0, 0)),
        )
        .unwrap_err();
        assert!(matches!(err, WorkoutError::Calculation { .. }));
    }

    #[test]
    fn zero_repetitions_are_rejected() {
        let err = Repeat::new(0, vec![run_step(dec!(1))]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::invalid_parameter("repetition_count", "0".to_owned())
        );
    }

    #[test]
    fn flatten_expands_repeats_in_order() {
        let a = run_step(dec!(1));
        let b = SimpleStep::new(
            StepType::Recover,
            StepDuration::kilometers(dec!(0.5)),
            IntensityTarget::pace(PaceRange::from_seconds(360, 390)),
        )
        .unwrap();
        let steps = vec![Step::Repeat(
            Repeat::new(3, vec![a.clone(), b.clone()]).unwrap(),
        )];

        let flat = flatten(&steps);
        assert_eq!(flat.len(), 6);
        for pair in flat.chunks(2) {
            assert_eq!(pair[0], &a);
            assert_eq!(pair[1], &b);
        }
    }

    #[test]
    fn flatten_of_empty_list_is_empty() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn every_step_type_has_a_label() {
        for step_type in StepType::ALL {
            assert!(!step_type.label().is_empty());
        }
    }
}
