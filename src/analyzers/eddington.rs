// ABOUTME: Eddington number analyzer over per-units activity distances
// ABOUTME: Distances are truncated to whole units before the streaming pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::algorithms::eddington;
use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::Activity;

const DOC: &str = "eddington returns the Eddington number for all activities

The Eddington number is the largest integer E where you have covered at
least E miles (or kilometers) on at least E occasions.";

/// Eddington number over truncated per-units distances
pub struct EddingtonAnalyzer;

#[async_trait]
impl Analyzer for EddingtonAnalyzer {
    fn name(&self) -> &'static str {
        "eddington"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        #[allow(clippy::cast_possible_truncation)]
        let values: Vec<i64> = activities
            .iter()
            .map(|act| ctx.units.distance(act.distance) as i64)
            .collect();
        Ok(serde_json::to_value(eddington::number(&values))?)
    }
}
