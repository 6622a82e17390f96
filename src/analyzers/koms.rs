// ABOUTME: Collects segment efforts holding an overall rank-1 achievement
// ABOUTME: Efforts are returned raw; they carry no unit-dependent fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::models::{Activity, SegmentEffort};

const DOC: &str = "koms returns all KOMs for the activities";

/// King-of-the-mountain analyzer
pub struct Koms;

#[async_trait]
impl Analyzer for Koms {
    fn name(&self) -> &'static str {
        "koms"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    async fn run(&self, _ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let mut efforts: Vec<&SegmentEffort> = Vec::new();
        for act in activities {
            for effort in &act.segment_efforts {
                if effort
                    .achievements
                    .iter()
                    .any(|a| a.rank == 1 && a.kind == "overall")
                {
                    efforts.push(effort);
                }
            }
        }
        Ok(serde_json::to_value(efforts)?)
    }
}
