// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Activity builders and a trivial stub expression evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use activity_insights::eval::{EvalError, Evaluator};
use activity_insights::models::Activity;

/// Install a test-writer tracing subscriber, once per test binary
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build an activity with the fields most tests care about
pub fn activity(id: i64, activity_type: &str, distance: f64, elevation_gain: f64) -> Arc<Activity> {
    activity_on(id, activity_type, distance, elevation_gain, 2020, 6, 1)
}

/// Build an activity starting on a specific local date
pub fn activity_on(
    id: i64,
    activity_type: &str,
    distance: f64,
    elevation_gain: f64,
    year: i32,
    month: u32,
    day: u32,
) -> Arc<Activity> {
    let local = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    Arc::new(Activity {
        id,
        name: format!("activity {id}"),
        start_date: Utc.from_utc_datetime(&local),
        start_date_local: local,
        distance,
        elevation_gain,
        moving_time: 3600,
        average_speed: 5.0,
        activity_type: activity_type.to_owned(),
        ..Activity::default()
    })
}

/// Six activities matching the reference grouping layout:
///
/// ```text
/// 2009: Hike [1], Ride [3, 5]
/// 2010: Hike [4], Ride [2]
/// 2011: Run  [6]
/// ```
pub fn grouped_fixture() -> Vec<Arc<Activity>> {
    vec![
        activity_on(1, "Hike", 100_000.0, 30.0, 2009, 11, 10),
        activity_on(2, "Ride", 200_000.0, 60.0, 2010, 12, 10),
        activity_on(3, "Ride", 300_000.0, 90.0, 2009, 1, 10),
        activity_on(4, "Hike", 400_000.0, 120.0, 2010, 3, 10),
        activity_on(5, "Ride", 500_000.0, 150.0, 2009, 4, 10),
        activity_on(6, "Run", 600_000.0, 180.0, 2011, 5, 10),
    ]
}

/// Trivial expression evaluator understanding a handful of fixed expressions.
///
/// Filter expressions: `true`, `false`, `type == <T>`. Key expressions:
/// `year`, `type`, `constant`. Anything else fails, standing in for a parse
/// error in a real evaluator.
pub struct StubEvaluator;

#[derive(Debug, thiserror::Error)]
#[error("unable to parse expression: {0}")]
pub struct BadExpression(String);

#[async_trait]
impl Evaluator for StubEvaluator {
    async fn filter(
        &self,
        expr: &str,
        activities: &[Arc<Activity>],
    ) -> Result<Vec<Arc<Activity>>, EvalError> {
        match expr {
            "true" => Ok(activities.to_vec()),
            "false" => Ok(Vec::new()),
            _ => match expr.strip_prefix("type == ") {
                Some(t) => Ok(activities
                    .iter()
                    .filter(|a| a.activity_type == t)
                    .cloned()
                    .collect()),
                None => Err(Box::new(BadExpression(expr.to_owned()))),
            },
        }
    }

    async fn map_keys(
        &self,
        expr: &str,
        activities: &[Arc<Activity>],
    ) -> Result<Vec<String>, EvalError> {
        use chrono::Datelike;
        match expr {
            "year" => Ok(activities
                .iter()
                .map(|a| a.start_date_local.year().to_string())
                .collect()),
            "type" => Ok(activities.iter().map(|a| a.activity_type.clone()).collect()),
            "constant" => Ok(vec!["all".to_owned(); activities.len()]),
            _ => Err(Box::new(BadExpression(expr.to_owned()))),
        }
    }
}
