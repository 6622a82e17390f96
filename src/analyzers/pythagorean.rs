// ABOUTME: Largest hypotenuse of raw distance and elevation gain
// ABOUTME: A single best activity, or null for an empty pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::{Activity, ActivityView};

const DOC: &str =
    "pythagorean returns the activity with the largest hypotenuse of distance and elevation gain";

/// The best activity and its hypotenuse in meters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PythagoreanResult {
    /// The winning activity
    pub activity: ActivityView,
    /// Truncated hypotenuse of raw distance and elevation, both in meters
    pub number: i64,
}

/// Pythagorean analyzer
pub struct Pythagorean;

#[async_trait]
impl Analyzer for Pythagorean {
    fn name(&self) -> &'static str {
        "pythagorean"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let best = activities
            .iter()
            .map(|act| {
                #[allow(clippy::cast_possible_truncation)]
                let number = act.distance.hypot(act.elevation_gain) as i64;
                (act, number)
            })
            .max_by_key(|(_, number)| *number);
        match best {
            Some((act, number)) => Ok(serde_json::to_value(PythagoreanResult {
                activity: ActivityView::new(act, ctx.units),
                number,
            })?),
            None => Ok(Value::Null),
        }
    }
}
