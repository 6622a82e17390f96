// ABOUTME: Per-activity weather forecasts from an external provider
// ABOUTME: Sequential outbound calls; observes the context deadline between activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::analysis::{Analyzer, Context};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::models::{Activity, ActivityView};
use crate::weather::{Forecast, WeatherProvider};

const DOC: &str = "forecast returns the current weather forecast at each activity's start point";

/// An activity paired with the forecast at its start point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// The activity
    pub activity: ActivityView,
    /// Forecast at the activity's start point
    pub forecast: Forecast,
}

/// Forecast analyzer backed by a weather provider collaborator.
///
/// Calls the provider once per activity, sequentially, blocking the pipeline
/// on network latency; the context deadline is checked before each call so a
/// caller can bound the total run time.
pub struct ForecastAnalyzer {
    provider: Arc<dyn WeatherProvider>,
}

impl ForecastAnalyzer {
    /// Analyzer backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Analyzer for ForecastAnalyzer {
    fn name(&self) -> &'static str {
        "forecast"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let mut results: Vec<ForecastResult> = Vec::new();
        for act in activities {
            if ctx.expired() {
                return Err(AnalysisError::DeadlineExceeded);
            }
            let Some((latitude, longitude)) = act.start_latlng else {
                warn!(id = act.id, "activity has no start point");
                continue;
            };
            let forecast = self
                .provider
                .forecast(latitude, longitude)
                .await
                .map_err(|e| AnalysisError::Analyzer {
                    name: self.name().to_owned(),
                    source: e,
                })?;
            results.push(ForecastResult {
                activity: ActivityView::new(act, ctx.units),
                forecast,
            });
        }
        Ok(serde_json::to_value(results)?)
    }
}
