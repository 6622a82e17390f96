// ABOUTME: Raw activity records and the derived presentation view
// ABOUTME: Raw records are immutable inputs; views are recomputed per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::Units;

/// A single achievement earned on a segment effort
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievement {
    /// Rank within the achievement type (1 is best)
    pub rank: i64,
    /// Achievement type, e.g. `overall` or `pr`
    #[serde(rename = "type")]
    pub kind: String,
}

/// A timed effort over a known segment within an activity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentEffort {
    /// Provider-assigned effort identity
    pub id: i64,
    /// Segment name
    pub name: String,
    /// Elapsed time in seconds
    pub elapsed_time: u64,
    /// Achievements earned on this effort
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// A recorded trip, ride, or hike as supplied by an external source.
///
/// Raw records store distance and elevation gain in meters and average speed
/// in meters per second; unit conversion happens only when an
/// [`ActivityView`] is derived. The pipeline never mutates these records and
/// shares them read-only between passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    /// Provider-assigned identity
    pub id: i64,
    /// Activity name
    pub name: String,
    /// Start time in UTC
    pub start_date: DateTime<Utc>,
    /// Start time in the activity's local timezone
    pub start_date_local: NaiveDateTime,
    /// Distance in meters
    pub distance: f64,
    /// Elevation gain in meters
    pub elevation_gain: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Average speed in meters per second
    pub average_speed: f64,
    /// Activity type, e.g. `Ride`, `Hike`, `VirtualRide`
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Whether the activity was flagged as a commute
    #[serde(default)]
    pub commute: bool,
    /// Segment efforts recorded within the activity
    #[serde(default)]
    pub segment_efforts: Vec<SegmentEffort>,
    /// Geographic start point as (latitude, longitude)
    #[serde(default)]
    pub start_latlng: Option<(f64, f64)>,
}

/// Presentation view of an [`Activity`] converted into a unit system.
///
/// Ephemeral: derived on demand and never stored, so re-deriving with a
/// different unit system is always safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityView {
    /// Provider-assigned identity
    pub id: i64,
    /// Activity name
    pub name: String,
    /// Start time in UTC
    #[serde(rename = "startdate")]
    pub start_date: DateTime<Utc>,
    /// Distance in the view's distance unit
    pub distance: f64,
    /// Elevation gain in the view's elevation unit
    pub elevation: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Average speed in the view's speed unit
    pub average_speed: f64,
    /// Activity type
    #[serde(rename = "type")]
    pub activity_type: String,
}

impl ActivityView {
    /// Derive a presentation view from a raw activity and a unit system
    #[must_use]
    pub fn new(activity: &Activity, units: Units) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            start_date: activity.start_date,
            distance: units.distance(activity.distance),
            elevation: units.elevation(activity.elevation_gain),
            moving_time: activity.moving_time,
            average_speed: units.speed(activity.average_speed),
            activity_type: activity.activity_type.clone(),
        }
    }
}
