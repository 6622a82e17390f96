// ABOUTME: Weather provider seam consumed by the forecast analyzer
// ABOUTME: One synchronous forecast lookup per activity start point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A point forecast for an activity's start location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    /// Short human-readable summary, e.g. `Partly Cloudy`
    pub summary: String,
    /// Temperature in the provider's unit
    pub temperature: f64,
    /// Temperature unit label, e.g. `F` or `C`
    pub temperature_unit: String,
    /// Wind speed description, e.g. `5 to 10 mph`
    pub wind_speed: String,
    /// Compass wind direction, e.g. `NW`
    pub wind_direction: String,
}

/// Boxed provider error surfaced as an analyzer failure
pub type WeatherError = Box<dyn std::error::Error + Send + Sync>;

/// Looks up forecasts for geographic points.
///
/// The forecast analyzer calls this sequentially, one activity at a time, and
/// any provider error aborts the whole analysis.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the forecast for a latitude/longitude pair.
    ///
    /// # Errors
    /// Returns the provider's own error on transport or decoding failures.
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}
