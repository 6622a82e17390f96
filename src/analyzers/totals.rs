// ABOUTME: Aggregate totals: count, distance, elevation, moving hours, centuries
// ABOUTME: Century counts are tallied in both unit systems regardless of context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::Activity;
use crate::units::Units;

const DOC: &str = "totals sums distance, elevation gain, and moving time over all activities";

const CENTURY: f64 = 100.0;

/// Century ride counts in each unit system
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Centuries {
    /// Rides of at least 100 km
    pub metric: u64,
    /// Rides of at least 100 mi
    pub imperial: u64,
}

/// Aggregate totals for a leaf's activities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalsResult {
    /// Number of activities
    pub count: usize,
    /// Summed distance in the active distance unit
    pub distance: f64,
    /// Summed elevation gain in the active elevation unit
    pub elevation_gain: f64,
    /// Summed moving time in whole hours
    pub moving_time: u64,
    /// Century ride counts
    pub centuries: Centuries,
}

/// Totals analyzer
pub struct Totals;

#[async_trait]
impl Analyzer for Totals {
    fn name(&self) -> &'static str {
        "totals"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let mut result = TotalsResult {
            count: activities.len(),
            ..TotalsResult::default()
        };
        let mut seconds: u64 = 0;
        for act in activities {
            result.distance += ctx.units.distance(act.distance);
            result.elevation_gain += ctx.units.elevation(act.elevation_gain);
            seconds += act.moving_time;
            if Units::Metric.distance(act.distance) >= CENTURY {
                result.centuries.metric += 1;
            }
            if Units::Imperial.distance(act.distance) >= CENTURY {
                result.centuries.imperial += 1;
            }
        }
        result.moving_time = seconds / 3600;
        Ok(serde_json::to_value(result)?)
    }
}
