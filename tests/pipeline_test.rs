// ABOUTME: Integration tests for pass filtering and group-tree construction
// ABOUTME: Asserts partition invariants and error propagation through the evaluator seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use activity_insights::{AnalysisError, Pass, Units};
use common::{grouped_fixture, StubEvaluator};

#[tokio::test]
async fn trivial_filter_is_identity() {
    common::init_tracing();
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let filtered = pass.filter(&StubEvaluator, "true").await.unwrap();
    assert_eq!(filtered.activities.len(), pass.activities.len());
    let ids: Vec<i64> = filtered.activities.iter().map(|a| a.id).collect();
    let original: Vec<i64> = pass.activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, original);
    assert_eq!(filtered.units, pass.units);
}

#[tokio::test]
async fn filter_preserves_order_and_units() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let rides = pass.filter(&StubEvaluator, "type == Ride").await.unwrap();
    let ids: Vec<i64> = rides.activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3, 5]);
    assert_eq!(rides.units, Units::Metric);
}

#[tokio::test]
async fn filter_expression_error_is_fatal() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let err = pass.filter(&StubEvaluator, ".bogus syntax").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Expression(_)));
}

#[tokio::test]
async fn groupby_without_expressions_is_a_leaf_root() {
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let group = pass.group_by(&StubEvaluator, &[]).await.unwrap();
    assert!(group.is_leaf());
    assert_eq!(group.key, "");
    assert_eq!(group.level, 0);
    assert_eq!(group.pass.activities.len(), 6);
}

#[tokio::test]
async fn groupby_constant_key_yields_one_child() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let group = pass.group_by(&StubEvaluator, &["constant"]).await.unwrap();
    assert_eq!(group.children.len(), 1);
    let child = &group.children[0];
    assert_eq!(child.key, "all");
    assert_eq!(child.level, 1);
    assert_eq!(child.pass.activities.len(), 6);
}

#[tokio::test]
async fn groupby_two_levels_partitions_exactly() {
    let pass = Pass::new(Units::Imperial, grouped_fixture());
    let group = pass
        .group_by(&StubEvaluator, &["year", "type"])
        .await
        .unwrap();

    let keys: BTreeSet<&str> = group.children.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, BTreeSet::from(["2009", "2010", "2011"]));

    for child in &group.children {
        assert_eq!(child.level, 1);
        // Parent activities are exactly the union of the grandchildren's.
        let child_ids: BTreeSet<i64> = child.pass.activities.iter().map(|a| a.id).collect();
        let mut leaf_ids: BTreeSet<i64> = BTreeSet::new();
        for leaf in &child.children {
            assert_eq!(leaf.level, 2);
            assert!(leaf.is_leaf());
            for act in &leaf.pass.activities {
                assert!(leaf_ids.insert(act.id), "activity in two sibling leaves");
            }
        }
        assert_eq!(child_ids, leaf_ids);
    }

    let year2009 = group.children.iter().find(|c| c.key == "2009").unwrap();
    assert_eq!(year2009.pass.activities.len(), 3);
    assert_eq!(year2009.children.len(), 2);
    let year2011 = group.children.iter().find(|c| c.key == "2011").unwrap();
    assert_eq!(year2011.pass.activities.len(), 1);
    assert_eq!(year2011.children.len(), 1);
}

#[tokio::test]
async fn groupby_expression_error_aborts_whole_call() {
    let pass = Pass::new(Units::Metric, grouped_fixture());
    let err = pass
        .group_by(&StubEvaluator, &["year", ".bogus"])
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Expression(_)));
}

#[tokio::test]
async fn empty_pass_groups_without_error() {
    let pass = Pass::new(Units::Metric, Vec::new());
    let group = pass.group_by(&StubEvaluator, &["year"]).await.unwrap();
    assert!(group.children.is_empty());
    assert!(group.pass.activities.is_empty());
}
