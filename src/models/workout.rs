// ABOUTME: Workout aggregate: typed, ordered step sequence with derived metrics
// ABOUTME: Display name is computed lazily once and memoized safely across threads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::step::{flatten, SimpleStep, Step};
use crate::calculation;
use crate::models::Distance;
use crate::naming::WorkoutNamer;

/// Archetype of a workout, each with a fixed display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Relaxed aerobic run
    EasyRun,
    /// Extended aerobic run
    LongRun,
    /// Mid-length aerobic run
    MediumRun,
    /// A race itself
    Race,
    /// Run at goal race pace
    RacePace,
    /// Sustained comfortably-hard run
    TempoRun,
    /// Run at lactate threshold
    Threshold,
    /// Tempo effort broken into repeats
    TempoRunRepeat,
    /// Threshold effort broken into repeats
    ThresholdRepeat,
    /// Classic interval session
    Intervals,
    /// Short fast repetitions
    Repetition,
    /// Uphill repeats with jog-down recovery
    HillRepeat,
    /// Easy run finished with strides
    EasyRunWithStrides,
    /// Non-running cross training
    Cross,
    /// Unstructured speed play
    Fartlek,
    /// No training
    Rest,
}

impl WorkoutType {
    /// Every workout type, for completeness checks
    pub const ALL: [Self; 16] = [
        Self::EasyRun,
        Self::LongRun,
        Self::MediumRun,
        Self::Race,
        Self::RacePace,
        Self::TempoRun,
        Self::Threshold,
        Self::TempoRunRepeat,
        Self::ThresholdRepeat,
        Self::Intervals,
        Self::Repetition,
        Self::HillRepeat,
        Self::EasyRunWithStrides,
        Self::Cross,
        Self::Fartlek,
        Self::Rest,
    ];

    /// Display label for this workout type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EasyRun => "Easy Run",
            Self::LongRun => "Long Run",
            Self::MediumRun => "Medium Run",
            Self::Race => "Race",
            Self::RacePace => "Race Pace",
            Self::TempoRun => "Tempo Run",
            Self::Threshold => "Threshold",
            Self::TempoRunRepeat => "Tempo Run Repeat",
            Self::ThresholdRepeat => "Threshold Repeat",
            Self::Intervals => "Intervals",
            Self::Repetition => "Repetition",
            Self::HillRepeat => "Hill Repeat",
            Self::EasyRunWithStrides => "Easy Run with Strides",
            Self::Cross => "Cross Training",
            Self::Fartlek => "Fartlek",
            Self::Rest => "Rest Day",
        }
    }
}

/// An ordered, immutable sequence of steps under one workout type.
///
/// The workout exclusively owns its steps. Aggregate metrics are computed on
/// demand by the [`calculation`] service; the display name is computed on
/// first access and memoized. The name computation is pure and deterministic,
/// so concurrent readers racing to populate the memo cell all observe the
/// same value.
#[derive(Debug)]
pub struct Workout {
    workout_type: WorkoutType,
    steps: Vec<Step>,
    name: OnceLock<String>,
}

impl Workout {
    /// A workout over a fixed step sequence
    #[must_use]
    pub fn new(workout_type: WorkoutType, steps: Vec<Step>) -> Self {
        Self {
            workout_type,
            steps,
            name: OnceLock::new(),
        }
    }

    /// The workout's archetype
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    /// The workout's steps as constructed
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The steps with every repeat group expanded, in order.
    ///
    /// Recomputed fresh on every call; only the name is memoized.
    #[must_use]
    pub fn flattened_steps(&self) -> Vec<&SimpleStep> {
        flatten(&self.steps)
    }

    /// The human-readable display name, computed once per instance.
    pub fn name(&self) -> &str {
        self.name
            .get_or_init(|| WorkoutNamer::shared().generate(self))
    }

    /// Total expected time over all flattened steps
    #[must_use]
    pub fn total_time(&self) -> chrono::Duration {
        calculation::total_time(self)
    }

    /// Estimated time over all flattened steps
    #[must_use]
    pub fn estimated_time(&self) -> chrono::Duration {
        calculation::estimated_time(self)
    }

    /// Total distance over all flattened steps, rounded to one decimal
    #[must_use]
    pub fn total_distance(&self) -> Distance {
        calculation::total_distance(self)
    }

    /// Estimated distance over all flattened steps, unrounded
    #[must_use]
    pub fn estimated_distance(&self) -> Distance {
        calculation::estimated_distance(self)
    }
}

impl Clone for Workout {
    fn clone(&self) -> Self {
        // The memo cell starts empty on the clone; the name recomputes to the
        // same value on demand.
        Self::new(self.workout_type, self.steps.clone())
    }
}

impl PartialEq for Workout {
    fn eq(&self, other: &Self) -> bool {
        self.workout_type == other.workout_type && self.steps == other.steps
    }
}

impl Eq for Workout {}
