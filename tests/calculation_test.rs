// ABOUTME: Integration tests for the aggregation service
// ABOUTME: Covers time/distance sums, the rounded/unrounded pair, and empty workouts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Duration;
use pacecraft::models::{
    Distance, IntensityTarget, PaceRange, SimpleStep, Step, StepDuration, StepType, Workout,
    WorkoutType,
};
use pacecraft::{calculation, templates, WorkoutBuilder};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn easy_pace() -> PaceRange {
    PaceRange::from_seconds(300, 360)
}

fn easy_run(km: Decimal) -> Workout {
    templates::easy_run_workout(km, easy_pace()).unwrap()
}

#[test]
fn total_time_sums_estimated_step_times() {
    // 10 km at an average of 5:30 min/km.
    let workout = easy_run(dec!(10));
    assert_eq!(calculation::total_time(&workout), Duration::seconds(3300));
}

#[test]
fn estimated_time_matches_total_time() {
    let workout = WorkoutBuilder::new()
        .with_type(WorkoutType::EasyRun)
        .with_simple_run_step(dec!(5.123), easy_pace())
        .with_simple_run_step(dec!(5), easy_pace())
        .build()
        .unwrap();
    // 330 s/km x 10.123 km, millisecond-exact.
    let expected = Duration::milliseconds(3_340_590);
    assert_eq!(calculation::total_time(&workout), expected);
    assert_eq!(calculation::estimated_time(&workout), expected);
}

#[test]
fn total_distance_is_rounded_estimated_is_not() {
    let workout = WorkoutBuilder::new()
        .with_type(WorkoutType::EasyRun)
        .with_simple_run_step(dec!(5.123), easy_pace())
        .with_simple_run_step(dec!(5), easy_pace())
        .build()
        .unwrap();
    assert_eq!(
        calculation::total_distance(&workout),
        Distance::kilometers(dec!(10.1))
    );
    assert_eq!(
        calculation::estimated_distance(&workout),
        Distance::kilometers(dec!(10.123))
    );
}

#[test]
fn total_distance_rounds_halves_away_from_zero() {
    let workout = WorkoutBuilder::new()
        .with_type(WorkoutType::EasyRun)
        .with_simple_run_step(dec!(5.125), easy_pace())
        .with_simple_run_step(dec!(5.125), easy_pace())
        .build()
        .unwrap();
    assert_eq!(
        calculation::total_distance(&workout),
        Distance::kilometers(dec!(10.3))
    );
}

#[test]
fn time_based_steps_contribute_their_estimated_distance() {
    let timed = SimpleStep::new(
        StepType::Run,
        StepDuration::time(Duration::minutes(30)),
        IntensityTarget::pace(PaceRange::from_seconds(300, 300)),
    )
    .unwrap();
    let fixed = SimpleStep::new(
        StepType::CoolDown,
        StepDuration::kilometers(dec!(4)),
        IntensityTarget::pace(easy_pace()),
    )
    .unwrap();
    let workout = Workout::new(
        WorkoutType::EasyRun,
        vec![Step::Simple(timed), Step::Simple(fixed)],
    );
    // 30 min at 5:00 min/km estimates 6 km, plus the fixed 4 km.
    assert_eq!(
        calculation::total_distance(&workout),
        Distance::kilometers(dec!(10))
    );
}

#[test]
fn repeats_are_expanded_before_summing() {
    let workout = WorkoutBuilder::new()
        .with_type(WorkoutType::Intervals)
        .with_repeat_step(
            5,
            dec!(0.8),
            dec!(0.4),
            PaceRange::from_seconds(200, 210),
            PaceRange::from_seconds(345, 360),
        )
        .build()
        .unwrap();
    assert_eq!(
        calculation::total_distance(&workout),
        Distance::kilometers(dec!(6))
    );
    // 5 x (0.8 km at 3:25 + 0.4 km at 5:52.5)
    assert_eq!(
        calculation::total_time(&workout),
        Duration::milliseconds(5 * (164_000 + 141_000))
    );
}

#[test]
fn empty_workout_sums_to_zero() {
    let workout = templates::rest_workout();
    assert_eq!(calculation::total_time(&workout), Duration::zero());
    assert_eq!(
        calculation::total_distance(&workout),
        Distance::kilometers(Decimal::ZERO)
    );
    assert_eq!(
        calculation::estimated_distance(&workout),
        Distance::kilometers(Decimal::ZERO)
    );
}

#[test]
fn workout_accessors_delegate_to_the_service() {
    let workout = easy_run(dec!(10));
    assert_eq!(workout.total_time(), calculation::total_time(&workout));
    assert_eq!(
        workout.total_distance(),
        calculation::total_distance(&workout)
    );
    assert_eq!(
        workout.estimated_distance(),
        calculation::estimated_distance(&workout)
    );
    assert_eq!(
        workout.estimated_time(),
        calculation::estimated_time(&workout)
    );
}
