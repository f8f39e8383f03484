// ABOUTME: Aggregation service deriving workout totals from flattened steps
// ABOUTME: Sums per-step estimated time and resolved distance with the contracted rounding
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::{Distance, Workout};
use crate::units;

/// Fractional digits kept by the rounded total-distance aggregate
const TOTAL_DISTANCE_DIGITS: u32 = 1;

/// Sum of `estimated_time` over the flattened steps. Both public time
/// aggregates delegate here so they cannot drift apart.
fn summed_time(workout: &Workout) -> Duration {
    workout
        .flattened_steps()
        .iter()
        .fold(Duration::zero(), |acc, step| acc + step.estimated_time())
}

/// Sum of resolved distance (fixed plus estimated) over the flattened steps.
/// Both public distance aggregates delegate here.
fn summed_distance(workout: &Workout) -> Decimal {
    workout
        .flattened_steps()
        .iter()
        .map(|step| step.covered_distance())
        .sum()
}

/// Total expected time of the workout, sub-second precision preserved.
#[must_use]
pub fn total_time(workout: &Workout) -> Duration {
    summed_time(workout)
}

/// Estimated time of the workout.
///
/// Intentionally the same computation as [`total_time`]; both sum the same
/// per-step field and both remain exposed for API compatibility.
#[must_use]
pub fn estimated_time(workout: &Workout) -> Duration {
    summed_time(workout)
}

/// Total distance of the workout in kilometers, rounded to one fractional
/// digit with halves away from zero.
#[must_use]
pub fn total_distance(workout: &Workout) -> Distance {
    Distance::kilometers(units::round_half_away(
        summed_distance(workout),
        TOTAL_DISTANCE_DIGITS,
    ))
}

/// Estimated distance of the workout in kilometers.
///
/// Same sum as [`total_distance`] but intentionally returned unrounded; both
/// variants remain exposed for API compatibility.
#[must_use]
pub fn estimated_distance(workout: &Workout) -> Distance {
    Distance::kilometers(summed_distance(workout))
}
