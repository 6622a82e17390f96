// ABOUTME: Longest distance covered at or above the average speed magnitude
// ABOUTME: Compares raw meters against raw meters-per-second, as the record defines it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::{Activity, ActivityView};

const DOC: &str = "hourrecord returns the longest distance traveled exceeding the average speed";

/// Hour-record analyzer
pub struct HourRecord;

#[async_trait]
impl Analyzer for HourRecord {
    fn name(&self) -> &'static str {
        "hourrecord"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let best = activities
            .iter()
            .filter(|act| act.distance >= act.average_speed)
            .max_by(|a, b| a.average_speed.total_cmp(&b.average_speed));
        match best {
            Some(act) => Ok(serde_json::to_value(ActivityView::new(act, ctx.units))?),
            None => Ok(Value::Null),
        }
    }
}
