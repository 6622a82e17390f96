// ABOUTME: Renders every activity in the active units
// ABOUTME: Useful for debugging filter expressions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::{Activity, ActivityView};

const DOC: &str = "splat simply returns all activities in the units specified

This analyzer is useful for debugging the filter.";

/// Identity analyzer: every activity as a presentation view
pub struct Splat;

#[async_trait]
impl Analyzer for Splat {
    fn name(&self) -> &'static str {
        "splat"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let views: Vec<ActivityView> = activities
            .iter()
            .map(|act| ActivityView::new(act, ctx.units))
            .collect();
        Ok(serde_json::to_value(views)?)
    }
}
