// ABOUTME: Integration tests for the data model
// ABOUTME: Display-label completeness, serde round trips, and workout equality semantics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacecraft::models::{
    Distance, DistanceMetric, IntensityTargetType, PaceRange, StepType, WorkoutType,
};
use pacecraft::templates;
use rust_decimal_macros::dec;

#[test]
fn every_workout_type_has_a_display_label() {
    assert_eq!(WorkoutType::ALL.len(), 16);
    for workout_type in WorkoutType::ALL {
        assert!(!workout_type.label().is_empty(), "{workout_type:?}");
    }
    assert_eq!(WorkoutType::Rest.label(), "Rest Day");
    assert_eq!(WorkoutType::EasyRun.label(), "Easy Run");
    assert_eq!(WorkoutType::Intervals.label(), "Intervals");
}

#[test]
fn every_step_type_has_a_display_label() {
    for step_type in StepType::ALL {
        assert!(!step_type.label().is_empty(), "{step_type:?}");
    }
    assert_eq!(StepType::Recover.label(), "Recover");
}

#[test]
fn every_intensity_target_type_has_a_display_label() {
    for target_type in IntensityTargetType::ALL {
        assert!(!target_type.label().is_empty(), "{target_type:?}");
    }
}

#[test]
fn workout_type_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&WorkoutType::EasyRun).unwrap(),
        "\"easy_run\""
    );
    assert_eq!(
        serde_json::from_str::<WorkoutType>("\"hill_repeat\"").unwrap(),
        WorkoutType::HillRepeat
    );
}

#[test]
fn distance_round_trips_through_serde() {
    let distance = Distance::kilometers(dec!(10.5));
    let json = serde_json::to_string(&distance).unwrap();
    let back: Distance = serde_json::from_str(&json).unwrap();
    assert_eq!(distance, back);
}

#[test]
fn distance_converts_miles_to_kilometers() {
    let five_miles = Distance::miles(dec!(5));
    assert_eq!(five_miles.value_in_kilometers(), dec!(8.046720));
    assert_eq!(five_miles.metric(), DistanceMetric::Miles);
}

#[test]
fn cloned_workouts_compare_equal_and_rename_identically() {
    let original = templates::easy_run_workout(dec!(10), PaceRange::from_seconds(300, 360)).unwrap();
    let original_name = original.name().to_owned();

    let clone = original.clone();
    assert_eq!(clone, original);
    assert_eq!(clone.name(), original_name);
}
