// ABOUTME: Unit system selection and presentation-layer conversions
// ABOUTME: Raw activities always store meters and meters-per-second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const METERS_PER_MILE: f64 = 1609.344;
const FEET_PER_METER: f64 = 3.280_839_895_013_123;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Unit system used when presenting distance, elevation, and speed.
///
/// Raw activities store meters and meters per second; `Units` controls only
/// the conversion applied at presentation time and never changes algorithmic
/// outcomes beyond that conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Miles, feet, miles per hour
    Imperial,
    /// Kilometers, meters, kilometers per hour
    Metric,
}

impl Units {
    /// Convert a distance in meters into the active distance unit
    #[must_use]
    pub fn distance(self, meters: f64) -> f64 {
        match self {
            Self::Imperial => meters / METERS_PER_MILE,
            Self::Metric => meters / 1000.0,
        }
    }

    /// Convert an elevation in meters into the active elevation unit
    #[must_use]
    pub fn elevation(self, meters: f64) -> f64 {
        match self {
            Self::Imperial => meters * FEET_PER_METER,
            Self::Metric => meters,
        }
    }

    /// Convert a speed in meters per second into the active speed unit
    #[must_use]
    pub fn speed(self, meters_per_second: f64) -> f64 {
        match self {
            Self::Imperial => meters_per_second * SECONDS_PER_HOUR / METERS_PER_MILE,
            Self::Metric => meters_per_second * SECONDS_PER_HOUR / 1000.0,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

/// Error returned when a unit system name is not recognized
#[derive(Debug, thiserror::Error)]
#[error("unexpected unit '{0}'")]
pub struct ParseUnitsError(String);

impl FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(ParseUnitsError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_conversions() {
        assert!((Units::Metric.distance(142_000.0) - 142.0).abs() < 1e-9);
        assert!((Units::Imperial.distance(1_609.344) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn elevation_conversions() {
        assert!((Units::Metric.elevation(30.0) - 30.0).abs() < 1e-9);
        assert!((Units::Imperial.elevation(0.3048) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn speed_conversions() {
        assert!((Units::Metric.speed(10.0) - 36.0).abs() < 1e-9);
        assert!((Units::Imperial.speed(1609.344 / 3600.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parse_round_trip() {
        assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!("imperial".parse::<Units>().unwrap(), Units::Imperial);
        assert_eq!(Units::Metric.to_string(), "metric");
        assert!("nautical".parse::<Units>().is_err());
    }
}
