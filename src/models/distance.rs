// ABOUTME: Distance value type with kilometers/miles metric semantics
// ABOUTME: Immutable decimal-valued measurement constructed via per-metric factories
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Kilometers in one statute mile
pub const KILOMETERS_PER_MILE: Decimal = dec!(1.609344);

/// Unit a [`Distance`] value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Metric kilometers
    Kilometers,
    /// Statute miles
    Miles,
    /// No meaningful unit (e.g. a workout without distance-based steps)
    Invalid,
}

impl DistanceMetric {
    /// Every metric, for completeness checks
    pub const ALL: [Self; 3] = [Self::Kilometers, Self::Miles, Self::Invalid];

    /// Display label for this metric
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
            Self::Invalid => "invalid",
        }
    }
}

/// An immutable distance measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    value: Decimal,
    metric: DistanceMetric,
}

impl Distance {
    /// A distance with an explicit metric
    #[must_use]
    pub const fn new(value: Decimal, metric: DistanceMetric) -> Self {
        Self { value, metric }
    }

    /// A distance in kilometers
    #[must_use]
    pub const fn kilometers(value: Decimal) -> Self {
        Self::new(value, DistanceMetric::Kilometers)
    }

    /// A distance in miles
    #[must_use]
    pub const fn miles(value: Decimal) -> Self {
        Self::new(value, DistanceMetric::Miles)
    }

    /// Zero kilometers
    #[must_use]
    pub const fn zero() -> Self {
        Self::kilometers(Decimal::ZERO)
    }

    /// The raw magnitude in this distance's own metric
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The metric the value is expressed in
    #[must_use]
    pub const fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// The magnitude converted to kilometers.
    ///
    /// `Invalid`-metric values pass through unchanged.
    #[must_use]
    pub fn value_in_kilometers(&self) -> Decimal {
        match self.metric {
            DistanceMetric::Miles => self.value * KILOMETERS_PER_MILE,
            DistanceMetric::Kilometers | DistanceMetric::Invalid => self.value,
        }
    }
}
