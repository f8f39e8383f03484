// ABOUTME: Data model for workouts: value types, steps, and the workout itself
// ABOUTME: Re-exports the model types from their per-concern submodules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

/// Distance value type and its metric enumeration
pub mod distance;

/// Step duration as distance or time
pub mod duration;

/// Intensity targets (pace ranges and friends)
pub mod intensity;

/// Atomic and composite workout steps, plus flattening
pub mod step;

/// The workout aggregate with memoized name and derived totals
pub mod workout;

pub use distance::{Distance, DistanceMetric, KILOMETERS_PER_MILE};
pub use duration::StepDuration;
pub use intensity::{IntensityTarget, IntensityTargetType, PaceRange};
pub use step::{flatten, Repeat, SimpleStep, Step, StepType};
pub use workout::{Workout, WorkoutType};
