// ABOUTME: Exact string formatting for distances, paces, and clock times in workout names
// ABOUTME: Output of these functions is contractual and matched byte-for-byte by tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Pacecraft Project

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::{Distance, DistanceMetric, IntensityTarget};
use crate::units;

/// Render a per-step distance: whole kilometers at or above 1 km, whole
/// meters below. Halves round away from zero.
///
/// ```
/// use pacecraft::naming::format_step_distance;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_step_distance(dec!(1.0)), "1km");
/// assert_eq!(format_step_distance(dec!(0.1)), "100m");
/// ```
#[must_use]
pub fn format_step_distance(value: Decimal) -> String {
    if value >= Decimal::ONE {
        format!("{}km", units::round_half_away(value, 0))
    } else {
        format!(
            "{}m",
            units::round_half_away(value * units::METERS_PER_KILOMETER, 0)
        )
    }
}

/// Render a workout's total distance with its metric suffix.
///
/// The `Kilometers` metric renders as `"km"`; any other metric uses its own
/// label. The value renders without a decimal point when it has no fractional
/// part, and with full decimal precision otherwise (`.` separator, no
/// grouping).
#[must_use]
pub fn format_total_distance(distance: &Distance, metric: DistanceMetric) -> String {
    let suffix = match metric {
        DistanceMetric::Kilometers => "km",
        other => other.label(),
    };
    format!("{} {suffix}", distance.value().normalize())
}

/// Render a pace target as `"@{min}~{max} min/km"`, or nothing for non-pace
/// targets.
#[must_use]
pub fn format_pace(target: &IntensityTarget) -> Option<String> {
    let range = target.pace_range()?;
    Some(format!(
        "@{}~{} min/km",
        format_clock(range.min()),
        format_clock(range.max())
    ))
}

/// Render a duration as `m:ss`, or `h:mm:ss` from one hour.
#[must_use]
pub fn format_clock(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::PaceRange;
    use rust_decimal_macros::dec;

    #[test]
    fn step_distance_switches_units_at_one_kilometer() {
        assert_eq!(format_step_distance(dec!(1.0)), "1km");
        assert_eq!(format_step_distance(dec!(0.1)), "100m");
        assert_eq!(format_step_distance(dec!(0.8)), "800m");
        assert_eq!(format_step_distance(dec!(5)), "5km");
        assert_eq!(format_step_distance(dec!(2.5)), "3km");
    }

    #[test]
    fn total_distance_drops_the_decimal_point_for_whole_values() {
        let ten = Distance::kilometers(dec!(10));
        assert_eq!(
            format_total_distance(&ten, DistanceMetric::Kilometers),
            "10 km"
        );
        let ten_and_a_half = Distance::kilometers(dec!(10.5));
        assert_eq!(
            format_total_distance(&ten_and_a_half, DistanceMetric::Kilometers),
            "10.5 km"
        );
        // Trailing zeros are not precision.
        let ten_scaled = Distance::kilometers(dec!(10.0));
        assert_eq!(
            format_total_distance(&ten_scaled, DistanceMetric::Kilometers),
            "10 km"
        );
    }

    #[test]
    fn non_kilometer_metrics_use_their_own_label() {
        let ten = Distance::kilometers(dec!(10));
        assert_eq!(
            format_total_distance(&ten, DistanceMetric::Invalid),
            "10 invalid"
        );
        assert_eq!(format_total_distance(&ten, DistanceMetric::Miles), "10 mi");
    }

    #[test]
    fn pace_renders_clock_times_per_kilometer() {
        let target = IntensityTarget::pace(PaceRange::from_seconds(300, 360));
        assert_eq!(
            format_pace(&target).unwrap(),
            "@5:00~6:00 min/km"
        );
        assert!(format_pace(&IntensityTarget::Open).is_none());
    }

    #[test]
    fn clock_uses_hours_from_one_hour() {
        assert_eq!(format_clock(Duration::seconds(225)), "3:45");
        assert_eq!(format_clock(Duration::seconds(3600)), "1:00:00");
        assert_eq!(format_clock(Duration::seconds(3725)), "1:02:05");
        assert_eq!(format_clock(Duration::seconds(59)), "0:59");
    }
}
