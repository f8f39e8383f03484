// ABOUTME: Decimal rounding and pace/time conversion helpers
// ABOUTME: Round-half-away-from-zero plus Duration-to-Decimal bridges used by derived fields
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::errors::WorkoutError;

/// Highest fractional-digit count `Decimal` can represent
pub const MAX_ROUND_DIGITS: u32 = 28;

/// Meters in one kilometer, as an exact decimal
pub const METERS_PER_KILOMETER: Decimal = dec!(1000);

const MILLIS_PER_SECOND: Decimal = dec!(1000);
const MILLIS_PER_MINUTE: Decimal = dec!(60_000);
const NANOS_PER_SECOND: Decimal = dec!(1_000_000_000);

/// Round a decimal to `digits` fractional digits, halves away from zero.
///
/// # Errors
///
/// Returns [`WorkoutError::InvalidParameter`] when `digits` exceeds
/// [`MAX_ROUND_DIGITS`].
pub fn round_half_away_from_zero(value: Decimal, digits: u32) -> Result<Decimal, WorkoutError> {
    if digits > MAX_ROUND_DIGITS {
        return Err(WorkoutError::invalid_parameter(
            "digits",
            digits.to_string(),
        ));
    }
    Ok(round_half_away(value, digits))
}

/// Infallible rounding for call sites with a statically valid digit count.
pub(crate) fn round_half_away(value: Decimal, digits: u32) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

/// Duration as exact decimal seconds (millisecond granularity).
#[must_use]
pub fn duration_to_seconds(duration: Duration) -> Decimal {
    Decimal::from(duration.num_milliseconds()) / MILLIS_PER_SECOND
}

/// Duration as exact decimal minutes (millisecond granularity).
#[must_use]
pub fn duration_to_minutes(duration: Duration) -> Decimal {
    Decimal::from(duration.num_milliseconds()) / MILLIS_PER_MINUTE
}

/// Decimal seconds back to a `Duration`, preserving sub-second precision.
///
/// `None` when the value does not fit the nanosecond range.
#[must_use]
pub fn seconds_to_duration(seconds: Decimal) -> Option<Duration> {
    (seconds * NANOS_PER_SECOND)
        .trunc()
        .to_i64()
        .map(Duration::nanoseconds)
}
