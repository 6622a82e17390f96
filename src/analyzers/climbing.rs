// ABOUTME: Flags activities whose elevation-to-distance ratio exceeds the golden ratio
// ABOUTME: Threshold defaults to 20 (metric) or 100 (imperial), overridable by flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::flags::Flag;
use crate::models::{Activity, ActivityView};
use crate::units::Units;

const DOC: &str = "climbing returns all activities exceeding the golden ratio

https://blog.wahoofitness.com/by-the-numbers-distance-and-elevation/";

/// Climbing ratio above which an activity counts, in meters gained per kilometer
pub const GOLDEN_RATIO_METRIC: i64 = 20;
/// Climbing ratio above which an activity counts, in feet gained per mile
pub const GOLDEN_RATIO_IMPERIAL: i64 = 100;

/// One activity exceeding the threshold, with its climbing ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimbingResult {
    /// The qualifying activity
    pub activity: ActivityView,
    /// Truncated elevation-per-distance ratio
    pub number: i64,
}

/// Golden-ratio climbing analyzer
pub struct Climbing {
    threshold: Option<i64>,
}

impl Climbing {
    /// Analyzer with the per-units default threshold
    #[must_use]
    pub fn new() -> Self {
        Self { threshold: None }
    }

    fn threshold(&self, units: Units) -> i64 {
        self.threshold.unwrap_or(match units {
            Units::Metric => GOLDEN_RATIO_METRIC,
            Units::Imperial => GOLDEN_RATIO_IMPERIAL,
        })
    }
}

impl Default for Climbing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for Climbing {
    fn name(&self) -> &'static str {
        "climbing"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        for flag in Flag::split(self.name(), tokens)? {
            match flag.name.as_str() {
                "threshold" => self.threshold = Some(flag.parse(self.name())?),
                _ => return Err(flag.unknown(self.name())),
            }
        }
        Ok(())
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let threshold = self.threshold(ctx.units);
        let mut climbings: Vec<ClimbingResult> = Vec::new();
        for act in activities {
            let dst = ctx.units.distance(act.distance);
            let elv = ctx.units.elevation(act.elevation_gain);
            if dst <= 0.0 {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let number = (elv / dst) as i64;
            if number > threshold {
                climbings.push(ClimbingResult {
                    activity: ActivityView::new(act, ctx.units),
                    number,
                });
            }
        }
        climbings.sort_by_key(|c| c.number);
        Ok(serde_json::to_value(climbings)?)
    }
}
