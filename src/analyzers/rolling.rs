// ABOUTME: Sliding-window search for the maximal accumulated distance
// ABOUTME: Windows are contiguous runs of time-sorted activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::flags::Flag;
use crate::models::{Activity, ActivityView};

const DOC: &str = "rolling returns the window of activities with the highest accumulated distance";

const DEFAULT_WINDOW: usize = 7;

/// The best window and its accumulated distance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollingResult {
    /// Activities in the winning window, time-sorted
    pub activities: Vec<ActivityView>,
    /// Accumulated distance in the active distance unit
    pub distance: f64,
}

/// Maximal sliding-window distance analyzer
pub struct Rolling {
    window: usize,
}

impl Rolling {
    /// Analyzer with the default window size
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl Default for Rolling {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for Rolling {
    fn name(&self) -> &'static str {
        "rolling"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        for flag in Flag::split(self.name(), tokens)? {
            match flag.name.as_str() {
                "window" => self.window = flag.parse(self.name())?,
                _ => return Err(flag.unknown(self.name())),
            }
        }
        Ok(())
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        if activities.len() < self.window || self.window == 0 {
            warn!(
                n = activities.len(),
                window = self.window,
                "too few activities"
            );
            return Ok(serde_json::to_value(RollingResult::default())?);
        }

        let mut sorted: Vec<&Arc<Activity>> = activities.iter().collect();
        sorted.sort_by_key(|a| a.start_date_local);
        let distances: Vec<f64> = sorted
            .iter()
            .map(|a| ctx.units.distance(a.distance))
            .collect();

        let mut best_idx = 0usize;
        let mut best_sum = 0.0_f64;
        for i in 0..=(distances.len() - self.window) {
            let sum: f64 = distances[i..i + self.window].iter().sum();
            if sum > best_sum {
                best_idx = i;
                best_sum = sum;
            }
        }

        let result = RollingResult {
            activities: sorted[best_idx..best_idx + self.window]
                .iter()
                .map(|a| ActivityView::new(a, ctx.units))
                .collect(),
            distance: best_sum,
        };
        Ok(serde_json::to_value(result)?)
    }
}
