// ABOUTME: Fluent builder assembling workouts from simple and repeat step specifications
// ABOUTME: Records step specs across calls and validates invariants in build()
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use rust_decimal::Decimal;

use crate::errors::WorkoutError;
use crate::models::{
    IntensityTarget, PaceRange, Repeat, SimpleStep, Step, StepDuration, StepType, Workout,
    WorkoutType,
};

/// Fluent, step-by-step workout construction.
///
/// Appending calls record step specifications; [`WorkoutBuilder::build`]
/// constructs the steps and checks the builder invariants (a type must be
/// set, and a non-rest workout needs at least one step).
///
/// ```
/// use pacecraft::models::{PaceRange, WorkoutType};
/// use pacecraft::WorkoutBuilder;
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), pacecraft::WorkoutError> {
/// let workout = WorkoutBuilder::new()
///     .with_type(WorkoutType::Intervals)
///     .with_repeat_step(
///         5,
///         dec!(0.8),
///         dec!(0.4),
///         PaceRange::from_seconds(200, 210),
///         PaceRange::from_seconds(345, 360),
///     )
///     .build()?;
/// assert_eq!(workout.flattened_steps().len(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct WorkoutBuilder {
    workout_type: Option<WorkoutType>,
    steps: Vec<StepSpec>,
}

/// A recorded step specification, turned into a concrete step at build time.
#[derive(Debug, Clone)]
enum StepSpec {
    Simple {
        step_type: StepType,
        distance_km: Decimal,
        pace: PaceRange,
    },
    Repeat {
        count: u32,
        on_km: Decimal,
        off_km: Decimal,
        on_pace: PaceRange,
        off_pace: PaceRange,
    },
}

impl StepSpec {
    fn into_step(self) -> Result<Step, WorkoutError> {
        match self {
            Self::Simple {
                step_type,
                distance_km,
                pace,
            } => Ok(Step::Simple(SimpleStep::new(
                step_type,
                StepDuration::kilometers(distance_km),
                IntensityTarget::pace(pace),
            )?)),
            Self::Repeat {
                count,
                on_km,
                off_km,
                on_pace,
                off_pace,
            } => {
                let on = SimpleStep::new(
                    StepType::Run,
                    StepDuration::kilometers(on_km),
                    IntensityTarget::pace(on_pace),
                )?;
                let off = SimpleStep::new(
                    StepType::Recover,
                    StepDuration::kilometers(off_km),
                    IntensityTarget::pace(off_pace),
                )?;
                Ok(Step::Repeat(Repeat::new(count, vec![on, off])?))
            }
        }
    }
}

impl WorkoutBuilder {
    /// An empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workout's type tag
    #[must_use]
    pub fn with_type(mut self, workout_type: WorkoutType) -> Self {
        self.workout_type = Some(workout_type);
        self
    }

    /// Append a simple step with a distance-based duration and pace target
    #[must_use]
    pub fn with_simple_step(
        mut self,
        step_type: StepType,
        distance_km: Decimal,
        pace: PaceRange,
    ) -> Self {
        self.steps.push(StepSpec::Simple {
            step_type,
            distance_km,
            pace,
        });
        self
    }

    /// Append a `Run`-typed simple step
    #[must_use]
    pub fn with_simple_run_step(self, distance_km: Decimal, pace: PaceRange) -> Self {
        self.with_simple_step(StepType::Run, distance_km, pace)
    }

    /// Append a repeat group whose unit is a `Run` "on" step followed by a
    /// `Recover` "off" step
    #[must_use]
    pub fn with_repeat_step(
        mut self,
        count: u32,
        on_km: Decimal,
        off_km: Decimal,
        on_pace: PaceRange,
        off_pace: PaceRange,
    ) -> Self {
        self.steps.push(StepSpec::Repeat {
            count,
            on_km,
            off_km,
            on_pace,
            off_pace,
        });
        self
    }

    /// Finalize the step list into a workout.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::Generation`] when no type was set, or when a
    /// non-rest workout has no steps; construction errors from the recorded
    /// step specifications propagate unchanged.
    pub fn build(self) -> Result<Workout, WorkoutError> {
        let Some(workout_type) = self.workout_type else {
            return Err(WorkoutError::generation(None, "workout type not set"));
        };
        if self.steps.is_empty() && workout_type != WorkoutType::Rest {
            return Err(WorkoutError::generation(
                Some(workout_type),
                "a non-rest workout needs at least one step",
            ));
        }

        let mut steps = Vec::with_capacity(self.steps.len());
        for spec in self.steps {
            steps.push(spec.into_step()?);
        }

        tracing::debug!(?workout_type, step_count = steps.len(), "workout built");
        Ok(Workout::new(workout_type, steps))
    }

    /// Finalize a single-step workout. Semantic alias for
    /// [`WorkoutBuilder::build`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`WorkoutBuilder::build`].
    pub fn build_simple_workout(self) -> Result<Workout, WorkoutError> {
        self.build()
    }

    /// Produce a `Rest` workout with no steps, bypassing step validation.
    #[must_use]
    pub fn build_rest_workout(self) -> Workout {
        Workout::new(WorkoutType::Rest, Vec::new())
    }
}
