// ABOUTME: Template factory turning high-level workout parameters into concrete step plans
// ABOUTME: Distance-balancing arithmetic for hill, tempo, and interval archetypes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

//! High-level workout archetypes.
//!
//! Each factory computes concrete step distances from the requested total and
//! delegates to [`WorkoutBuilder`]. Structured workouts open with a warmup and
//! close with a cooldown (2.0 km each by default); any kilometers the warmup
//! and structured main segment leave unaccounted for are appended to the
//! cooldown as additional easy distance, clamped at zero. When the requested
//! total is too small to cover the structured segments, the produced workout
//! is longer than requested rather than the structure being shrunk.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builder::WorkoutBuilder;
use crate::errors::WorkoutError;
use crate::models::{PaceRange, StepType, Workout, WorkoutType};
use crate::units;

/// Default warmup segment length in kilometers
pub const DEFAULT_WARMUP_KM: Decimal = dec!(2.0);

/// Default cooldown segment length in kilometers
pub const DEFAULT_COOLDOWN_KM: Decimal = dec!(2.0);

/// Fixed uphill effort length per hill repeat
const HILL_CLIMB_KM: Decimal = dec!(0.4);

/// Fixed downhill recovery length per hill repeat
const HILL_RECOVERY_KM: Decimal = dec!(0.4);

/// A race over the given distance, as a single run step.
///
/// # Errors
///
/// Propagates step-construction failures from the builder.
pub fn race_workout(distance_km: Decimal, pace: PaceRange) -> Result<Workout, WorkoutError> {
    WorkoutBuilder::new()
        .with_type(WorkoutType::Race)
        .with_simple_run_step(distance_km, pace)
        .build_simple_workout()
}

/// An easy run over the given distance, as a single run step.
///
/// # Errors
///
/// Propagates step-construction failures from the builder.
pub fn easy_run_workout(distance_km: Decimal, pace: PaceRange) -> Result<Workout, WorkoutError> {
    WorkoutBuilder::new()
        .with_type(WorkoutType::EasyRun)
        .with_simple_run_step(distance_km, pace)
        .build_simple_workout()
}

/// A run at goal race pace, as a single run step.
///
/// # Errors
///
/// Propagates step-construction failures from the builder.
pub fn race_pace_workout(distance_km: Decimal, pace: PaceRange) -> Result<Workout, WorkoutError> {
    WorkoutBuilder::new()
        .with_type(WorkoutType::RacePace)
        .with_simple_run_step(distance_km, pace)
        .build_simple_workout()
}

/// A rest day: no steps.
#[must_use]
pub fn rest_workout() -> Workout {
    WorkoutBuilder::new().build_rest_workout()
}

/// Hill repeats with default warmup and cooldown segments.
///
/// # Errors
///
/// Same failure modes as [`hill_workout_with_segments`].
pub fn hill_workout(
    repeats: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    hill_pace: PaceRange,
    recovery_pace: PaceRange,
) -> Result<Workout, WorkoutError> {
    hill_workout_with_segments(
        repeats,
        total_km,
        easy_pace,
        hill_pace,
        recovery_pace,
        DEFAULT_WARMUP_KM,
        DEFAULT_COOLDOWN_KM,
    )
}

/// Hill repeats: warmup, `repeats` x (0.4 km uphill + 0.4 km down), cooldown.
///
/// Distance not covered by warmup, cooldown, and the repeat block is added to
/// the cooldown as easy distance, clamped at zero.
///
/// # Errors
///
/// Returns [`WorkoutError::InvalidParameter`] for zero repeats; propagates
/// step-construction failures from the builder.
pub fn hill_workout_with_segments(
    repeats: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    hill_pace: PaceRange,
    recovery_pace: PaceRange,
    warmup_km: Decimal,
    cooldown_km: Decimal,
) -> Result<Workout, WorkoutError> {
    let remaining = total_km - (warmup_km + cooldown_km);
    let repeat_total = Decimal::from(repeats) * (HILL_CLIMB_KM + HILL_RECOVERY_KM);
    let additional_easy = (remaining - repeat_total).max(Decimal::ZERO);
    tracing::debug!(%total_km, %repeat_total, %additional_easy, "hill distances balanced");

    WorkoutBuilder::new()
        .with_type(WorkoutType::HillRepeat)
        .with_simple_step(StepType::WarmUp, warmup_km, easy_pace)
        .with_repeat_step(repeats, HILL_CLIMB_KM, HILL_RECOVERY_KM, hill_pace, recovery_pace)
        .with_simple_step(StepType::CoolDown, cooldown_km + additional_easy, easy_pace)
        .build()
}

/// A tempo run with default warmup and cooldown segments.
///
/// # Errors
///
/// Same failure modes as [`tempo_workout_with_segments`].
pub fn tempo_workout(
    tempo_minutes: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    tempo_pace: PaceRange,
) -> Result<Workout, WorkoutError> {
    tempo_workout_with_segments(
        tempo_minutes,
        total_km,
        easy_pace,
        tempo_pace,
        DEFAULT_WARMUP_KM,
        DEFAULT_COOLDOWN_KM,
    )
}

/// A tempo run: warmup, a tempo segment sized from the requested minutes at
/// the average tempo pace, cooldown plus leftover easy distance.
///
/// # Errors
///
/// Returns [`WorkoutError::Calculation`] for a zero average tempo pace;
/// propagates step-construction failures from the builder.
pub fn tempo_workout_with_segments(
    tempo_minutes: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    tempo_pace: PaceRange,
    warmup_km: Decimal,
    cooldown_km: Decimal,
) -> Result<Workout, WorkoutError> {
    let average_pace_minutes = units::duration_to_minutes(tempo_pace.average());
    let tempo_km = Decimal::from(tempo_minutes)
        .checked_div(average_pace_minutes)
        .ok_or_else(|| {
            WorkoutError::calculation(
                Decimal::ZERO,
                chrono::Duration::minutes(i64::from(tempo_minutes)),
            )
        })?;
    let additional_easy = (total_km - (warmup_km + tempo_km + cooldown_km)).max(Decimal::ZERO);
    tracing::debug!(%total_km, %tempo_km, %additional_easy, "tempo distances balanced");

    WorkoutBuilder::new()
        .with_type(WorkoutType::TempoRun)
        .with_simple_step(StepType::WarmUp, warmup_km, easy_pace)
        .with_simple_run_step(tempo_km, tempo_pace)
        .with_simple_step(StepType::CoolDown, cooldown_km + additional_easy, easy_pace)
        .build()
}

/// An interval session with default warmup and cooldown segments.
///
/// # Errors
///
/// Same failure modes as [`interval_workout_with_segments`].
pub fn interval_workout(
    repeats: u32,
    interval_meters: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    interval_pace: PaceRange,
    recovery_pace: PaceRange,
) -> Result<Workout, WorkoutError> {
    interval_workout_with_segments(
        repeats,
        interval_meters,
        total_km,
        easy_pace,
        interval_pace,
        recovery_pace,
        DEFAULT_WARMUP_KM,
        DEFAULT_COOLDOWN_KM,
    )
}

/// An interval session: warmup, `repeats` x (interval + equal-length
/// recovery), cooldown plus leftover easy distance.
///
/// # Errors
///
/// Returns [`WorkoutError::InvalidParameter`] for zero repeats; propagates
/// step-construction failures from the builder.
pub fn interval_workout_with_segments(
    repeats: u32,
    interval_meters: u32,
    total_km: Decimal,
    easy_pace: PaceRange,
    interval_pace: PaceRange,
    recovery_pace: PaceRange,
    warmup_km: Decimal,
    cooldown_km: Decimal,
) -> Result<Workout, WorkoutError> {
    let interval_km = Decimal::from(interval_meters) / units::METERS_PER_KILOMETER;
    // Recovery jog matches the interval length.
    let recovery_km = interval_km;
    let interval_total = Decimal::from(repeats) * (interval_km + recovery_km);
    let additional_easy = (total_km - (warmup_km + interval_total + cooldown_km)).max(Decimal::ZERO);
    tracing::debug!(%total_km, %interval_total, %additional_easy, "interval distances balanced");

    WorkoutBuilder::new()
        .with_type(WorkoutType::Intervals)
        .with_simple_step(StepType::WarmUp, warmup_km, easy_pace)
        .with_repeat_step(repeats, interval_km, recovery_km, interval_pace, recovery_pace)
        .with_simple_step(StepType::CoolDown, cooldown_km + additional_easy, easy_pace)
        .build()
}
