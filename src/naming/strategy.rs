// ABOUTME: Naming strategies producing ordered name components per workout type
// ABOUTME: Tagged-variant dispatch with a declared supported-type set per strategy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use crate::calculation;
use crate::models::{DistanceMetric, SimpleStep, StepType, Workout, WorkoutType};

use super::format::{format_pace, format_step_distance, format_total_distance};

/// A naming strategy. Each strategy declares the workout types it supports
/// and produces the ordered name components for a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Single-segment aerobic runs: label, total, pace of the first step
    SimpleRun,
    /// Repeat-structured sessions: label, total, repeat detail
    Interval,
    /// Sustained-effort runs: label, total, tempo segment detail
    TempoRun,
    /// Easy runs closed with strides: label, total, stride detail
    EasyRunWithStrides,
    /// Fallback: label, total (label only for rest days)
    Default,
}

impl Strategy {
    /// Registration order for the type table. Later entries win on collision.
    pub(crate) const REGISTERED: [Self; 4] = [
        Self::SimpleRun,
        Self::Interval,
        Self::TempoRun,
        Self::EasyRunWithStrides,
    ];

    /// The workout types this strategy claims. The fallback claims none.
    pub(crate) const fn supported_types(self) -> &'static [WorkoutType] {
        match self {
            Self::SimpleRun => &[
                WorkoutType::EasyRun,
                WorkoutType::MediumRun,
                WorkoutType::LongRun,
            ],
            Self::Interval => &[
                WorkoutType::HillRepeat,
                WorkoutType::Intervals,
                WorkoutType::Repetition,
                WorkoutType::TempoRunRepeat,
                WorkoutType::ThresholdRepeat,
            ],
            Self::TempoRun => &[WorkoutType::TempoRun, WorkoutType::Threshold],
            Self::EasyRunWithStrides => &[WorkoutType::EasyRunWithStrides],
            Self::Default => &[],
        }
    }

    /// Ordered name components for the workout. Blank components are dropped
    /// by the caller before joining.
    pub(crate) fn components(self, workout: &Workout) -> Vec<String> {
        let label = workout.workout_type().label().to_owned();
        match self {
            Self::Default => {
                if workout.workout_type() == WorkoutType::Rest {
                    vec![label]
                } else {
                    vec![label, formatted_total(workout)]
                }
            }
            Self::SimpleRun => {
                let mut parts = vec![label, formatted_total(workout)];
                if let Some(pace) = workout
                    .flattened_steps()
                    .first()
                    .and_then(|step| format_pace(&step.intensity_target()))
                {
                    parts.push(pace);
                }
                parts
            }
            Self::Interval => {
                let mut parts = vec![label, formatted_total(workout)];
                if let Some(detail) = repeat_detail(&workout.flattened_steps()) {
                    parts.push(detail);
                }
                parts
            }
            Self::TempoRun => {
                let mut parts = vec![label, formatted_total(workout)];
                if let Some(step) = workout
                    .flattened_steps()
                    .into_iter()
                    .find(|step| step.step_type() == StepType::Run)
                {
                    let mut piece = format_step_distance(step.covered_distance());
                    if let Some(pace) = format_pace(&step.intensity_target()) {
                        piece.push_str(&pace);
                    }
                    parts.push(piece);
                }
                parts
            }
            Self::EasyRunWithStrides => {
                let mut parts = vec![label, formatted_total(workout)];
                let flattened = workout.flattened_steps();
                // The leading easy-run segment does not count toward pairing.
                if let Some(detail) = flattened
                    .split_first()
                    .and_then(|(_, strides)| repeat_detail(strides))
                {
                    parts.push(detail);
                }
                parts
            }
        }
    }
}

/// Total distance rendered with the metric taken from the first flattened
/// step's duration, or `Invalid` when the workout has no distance-based lead.
fn formatted_total(workout: &Workout) -> String {
    let metric = workout
        .flattened_steps()
        .first()
        .and_then(|step| step.duration().distance_metric())
        .unwrap_or(DistanceMetric::Invalid);
    format_total_distance(&calculation::total_distance(workout), metric)
}

/// Render `"{quantity} x ({run}{pace} + {recovery} {label})"` from a step
/// list: the pair count is half the list length, the representative run is
/// the first `Run`-typed step, the representative recovery the first
/// walk/recover/rest step. `None` below two steps or without both
/// representatives.
fn repeat_detail(steps: &[&SimpleStep]) -> Option<String> {
    if steps.len() < 2 {
        return None;
    }
    let quantity = steps.len() / 2;
    let run = steps.iter().find(|step| step.step_type() == StepType::Run)?;
    let recovery = steps.iter().find(|step| step.step_type().is_recovery())?;

    let mut run_part = format_step_distance(run.covered_distance());
    if let Some(pace) = format_pace(&run.intensity_target()) {
        run_part.push_str(&pace);
    }
    Some(format!(
        "{quantity} x ({run_part} + {} {})",
        format_step_distance(recovery.covered_distance()),
        recovery.step_type().label()
    ))
}
