// ABOUTME: Display-name generation service dispatching workouts to naming strategies
// ABOUTME: Type-to-strategy table built once at construction; components joined with " - "
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

//! Workout display names.
//!
//! [`WorkoutNamer`] looks up a naming strategy by workout type in a mapping
//! built once at construction. Each strategy declares the types it supports;
//! when two strategies claim the same type the last-registered one wins, and
//! types nobody claims fall through to a default strategy. Strategies yield
//! ordered string components which are joined with `" - "`, blanks dropped.

mod format;
mod strategy;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Workout, WorkoutType};
use strategy::Strategy;

pub use format::{format_clock, format_pace, format_step_distance, format_total_distance};

/// Separator between name components
const COMPONENT_SEPARATOR: &str = " - ";

/// Generates display names for workouts.
#[derive(Debug)]
pub struct WorkoutNamer {
    strategies: HashMap<WorkoutType, Strategy>,
}

impl WorkoutNamer {
    /// Build the namer with its fixed type-to-strategy table.
    #[must_use]
    pub fn new() -> Self {
        let mut strategies = HashMap::new();
        for strategy in Strategy::REGISTERED {
            for workout_type in strategy.supported_types() {
                // Last-registered strategy wins on a type collision.
                strategies.insert(*workout_type, strategy);
            }
        }
        tracing::debug!(mapped_types = strategies.len(), "naming strategies registered");
        Self { strategies }
    }

    /// The shared process-wide namer instance.
    #[must_use]
    pub fn shared() -> &'static Self {
        static INSTANCE: OnceLock<WorkoutNamer> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Generate the display name for a workout.
    #[must_use]
    pub fn generate(&self, workout: &Workout) -> String {
        let strategy = self
            .strategies
            .get(&workout.workout_type())
            .copied()
            .unwrap_or(Strategy::Default);
        tracing::trace!(
            workout_type = ?workout.workout_type(),
            ?strategy,
            "dispatching naming strategy"
        );
        strategy
            .components(workout)
            .into_iter()
            .filter(|component| !component.trim().is_empty())
            .collect::<Vec<_>>()
            .join(COMPONENT_SEPARATOR)
    }
}

impl Default for WorkoutNamer {
    fn default() -> Self {
        Self::new()
    }
}
