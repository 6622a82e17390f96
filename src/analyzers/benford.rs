// ABOUTME: Benford's-law analyzer over per-units activity distances
// ABOUTME: A character statistic; large chi-squared suggests synthetic data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::algorithms::benford;
use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::Activity;

const DOC: &str =
    "benford computes the leading-digit distribution of distances against Benford's law";

/// Leading-digit distribution of truncated per-units distances
pub struct BenfordAnalyzer;

#[async_trait]
impl Analyzer for BenfordAnalyzer {
    fn name(&self) -> &'static str {
        "benford"
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
        Ok(serde_json::to_value(benford::law(&values))?)
    }
}
