// ABOUTME: Integration tests for the analysis orchestrator and nested document merge
// ABOUTME: Covers document shape, isolation, determinism, flags, and failure propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use activity_insights::analysis::{Analysis, Analyzer, Context};
use activity_insights::errors::{AnalysisError, AnalysisResult};
use activity_insights::models::Activity;
use activity_insights::{Pass, Units};
use common::{grouped_fixture, StubEvaluator};

/// Counts activities; doubles the count when `--double` is set
struct Counter {
    double: bool,
}

#[async_trait]
impl Analyzer for Counter {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn doc(&self) -> &'static str {
        "counts activities"
    }

    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        for flag in activity_insights::flags::Flag::split(self.name(), tokens)? {
            match flag.name.as_str() {
                "double" => self.double = true,
                _ => return Err(flag.unknown(self.name())),
            }
        }
        Ok(())
    }

    async fn run(&self, _ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let n = if self.double {
            activities.len() * 2
        } else {
            activities.len()
        };
        Ok(serde_json::json!(n))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("boom")]
struct Boom;

struct Failing;

#[async_trait]
impl Analyzer for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn doc(&self) -> &'static str {
        "always fails"
    }

    async fn run(&self, _ctx: &Context, _activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        Err(AnalysisError::analyzer(self.name(), Boom))
    }
}

fn counter() -> Vec<Box<dyn Analyzer>> {
    vec![Box::new(Counter { double: false })]
}

#[tokio::test]
async fn run_pass_nests_under_empty_key() {
    common::init_tracing();
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let analysis = Analysis::new(counter(), &[]).unwrap();
    let doc = analysis
        .run_pass(&Context::new(pass.units), &pass)
        .await
        .unwrap();
    assert_eq!(doc, serde_json::json!({"": {"counter": 6}}));
}

#[tokio::test]
async fn flags_reconfigure_analyzer_before_run() {
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let args: Vec<String> = ["counter", "--double"].map(str::to_owned).into();
    let analysis = Analysis::new(counter(), &args).unwrap();
    let doc = analysis
        .run_pass(&Context::new(pass.units), &pass)
        .await
        .unwrap();
    assert_eq!(doc, serde_json::json!({"": {"counter": 12}}));
}

#[tokio::test]
async fn unknown_flag_is_fatal_at_setup() {
    let args: Vec<String> = ["counter", "--triple"].map(str::to_owned).into();
    let err = Analysis::new(counter(), &args).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidFlag { .. }));
}

#[tokio::test]
async fn unroutable_token_is_fatal_at_setup() {
    let args: Vec<String> = ["tripler", "--x"].map(str::to_owned).into();
    let err = Analysis::new(counter(), &args).unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownAnalyzer(_)));
}

#[tokio::test]
async fn empty_selection_is_fatal() {
    let err = Analysis::new(Vec::new(), &[]).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySelection));
}

#[tokio::test]
async fn document_shape_mirrors_group_tree() {
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let group = pass
        .group_by(&StubEvaluator, &["year", "type"])
        .await
        .unwrap();
    let analysis = Analysis::new(counter(), &[]).unwrap();
    let doc = analysis.run(&Context::new(pass.units), &group).await.unwrap();
    assert_eq!(
        doc,
        serde_json::json!({
            "2009": {"Hike": {"counter": 1}, "Ride": {"counter": 2}},
            "2010": {"Hike": {"counter": 1}, "Ride": {"counter": 1}},
            "2011": {"Run": {"counter": 1}},
        })
    );
}

#[tokio::test]
async fn sibling_leaves_are_isolated() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let group = pass.group_by(&StubEvaluator, &["type"]).await.unwrap();
    let ctx = Context::new(pass.units);

    let analysis = Analysis::new(counter(), &[]).unwrap();
    let doc = analysis.run(&ctx, &group).await.unwrap();

    // Each leaf's result matches an independent run over just that leaf's
    // activities: siblings contribute nothing.
    for leaf in &group.children {
        let alone = Analysis::new(counter(), &[]).unwrap();
        let solo = alone.run_pass(&ctx, &leaf.pass).await.unwrap();
        assert_eq!(doc[leaf.key.as_str()], solo[""]);
    }
}

#[tokio::test]
async fn rerun_is_byte_identical() {
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let group = pass
        .group_by(&StubEvaluator, &["year", "type"])
        .await
        .unwrap();
    let analysis = Analysis::new(counter(), &[]).unwrap();
    let ctx = Context::new(pass.units);
    let first = analysis.run(&ctx, &group).await.unwrap();
    let second = analysis.run(&ctx, &group).await.unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn analyzer_failure_aborts_with_no_partial_document() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let group = pass.group_by(&StubEvaluator, &["type"]).await.unwrap();
    let analyzers: Vec<Box<dyn Analyzer>> =
        vec![Box::new(Counter { double: false }), Box::new(Failing)];
    let analysis = Analysis::new(analyzers, &[]).unwrap();
    let err = analysis
        .run(&Context::new(pass.units), &group)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Analyzer { name, .. } if name == "failing"));
}

#[tokio::test]
async fn empty_pass_still_produces_a_document() {
    let pass = Pass::new(Units::Metric, Vec::new());
    let analysis = Analysis::new(counter(), &[]).unwrap();
    let doc = analysis
        .run_pass(&Context::new(pass.units), &pass)
        .await
        .unwrap();
    assert_eq!(doc, serde_json::json!({"": {"counter": 0}}));
}
