// ABOUTME: Main library entry point for the pacecraft workout engine
// ABOUTME: Wires up models, builder, templates, calculation, and naming modules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

#![deny(unsafe_code)]

//! # Pacecraft
//!
//! A pure in-memory engine for structured running-training workouts. A workout
//! is an ordered sequence of steps, each carrying a duration (by distance or by
//! time) and an intensity target such as a pace range.
//!
//! The crate covers three concerns:
//!
//! - **Construction**: [`builder::WorkoutBuilder`] assembles workouts step by
//!   step, and [`templates`] provides the high-level archetypes (easy run,
//!   tempo run, hill repeats, intervals, race) with their distance-balancing
//!   arithmetic.
//! - **Aggregation**: [`calculation`] flattens repeated-step groups and derives
//!   total/estimated time and distance.
//! - **Naming**: [`naming`] renders a human-readable display name through a
//!   per-workout-type strategy table with exact formatting rules.
//!
//! All distance arithmetic uses [`rust_decimal::Decimal`] so that repeated
//! additions of small per-repeat distances stay exact; timespans use
//! [`chrono::Duration`].
//!
//! ## Quick start
//!
//! ```
//! use pacecraft::models::PaceRange;
//! use pacecraft::templates;
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), pacecraft::WorkoutError> {
//! let easy = PaceRange::from_seconds(300, 360); // 5:00-6:00 min/km
//! let workout = templates::easy_run_workout(dec!(10), easy)?;
//! assert_eq!(workout.name(), "Easy Run - 10 km - @5:00~6:00 min/km");
//! # Ok(())
//! # }
//! ```

/// Fluent workout construction API
pub mod builder;

/// Aggregate time/distance derivation over flattened steps
pub mod calculation;

/// Typed failure families for construction and calculation
pub mod errors;

/// Value types, steps, and the workout model
pub mod models;

/// Display-name generation with per-type strategies
pub mod naming;

/// High-level workout archetypes with distance balancing
pub mod templates;

/// Decimal rounding and pace/time conversion helpers
pub mod units;

pub use builder::WorkoutBuilder;
pub use errors::WorkoutError;
pub use models::{
    Distance, DistanceMetric, IntensityTarget, IntensityTargetType, PaceRange, Repeat, SimpleStep,
    Step, StepDuration, StepType, Workout, WorkoutType,
};
pub use naming::WorkoutNamer;
