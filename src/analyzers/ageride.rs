// ABOUTME: Activities whose distance exceeds the athlete's age in years at ride time
// ABOUTME: Requires a --birthday flag; reports mean, median, and total distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analysis::{Analyzer, Context};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::flags::Flag;
use crate::models::{Activity, ActivityView};

const DOC: &str = "ageride returns all activities longer than the athlete's age at ride time";

const SECONDS_PER_YEAR: f64 = 365.2425 * 24.0 * 3600.0;

/// Activities beating the athlete's age, with distance statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeRideResult {
    /// Qualifying activities
    pub activities: Vec<ActivityView>,
    /// Number of qualifying activities
    pub count: usize,
    /// Mean qualifying distance
    pub distance_average: f64,
    /// Median qualifying distance
    pub distance_median: f64,
    /// Total qualifying distance
    pub distance_total: f64,
}

/// Age-versus-distance analyzer
pub struct AgeRide {
    birthday: Option<NaiveDate>,
}

impl AgeRide {
    /// Analyzer with no birthday configured; running without one fails
    #[must_use]
    pub fn new() -> Self {
        Self { birthday: None }
    }
}

impl Default for AgeRide {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("birthday not set")]
struct BirthdayNotSet;

#[async_trait]
impl Analyzer for AgeRide {
    fn name(&self) -> &'static str {
        "ageride"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        for flag in Flag::split(self.name(), tokens)? {
            match flag.name.as_str() {
                "birthday" => self.birthday = Some(flag.parse(self.name())?),
                _ => return Err(flag.unknown(self.name())),
            }
        }
        Ok(())
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        let birthday = self
            .birthday
            .ok_or_else(|| AnalysisError::analyzer(self.name(), BirthdayNotSet))?;
        debug!(%birthday, "ageride");

        let born = birthday.and_hms_opt(0, 0, 0).unwrap_or_default();
        let mut views: Vec<ActivityView> = Vec::new();
        let mut distances: Vec<f64> = Vec::new();
        for act in activities {
            #[allow(clippy::cast_precision_loss)]
            let age_years = (act.start_date_local - born).num_seconds() as f64 / SECONDS_PER_YEAR;
            let distance = ctx.units.distance(act.distance);
            if distance > age_years {
                views.push(ActivityView::new(act, ctx.units));
                distances.push(distance);
            }
        }
        distances.sort_by(f64::total_cmp);

        let result = AgeRideResult {
            count: views.len(),
            activities: views,
            distance_average: mean(&distances),
            distance_median: median(&distances),
            distance_total: distances.iter().sum(),
        };
        Ok(serde_json::to_value(result)?)
    }
}

fn mean(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = sorted.len() as f64;
    sorted.iter().sum::<f64>() / n
}

/// Median of an ascending-sorted slice
fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_sorted_slices() {
        assert!((median(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((median(&[3.0]) - 3.0).abs() < f64::EPSILON);
        assert!((median(&[1.0, 3.0]) - 2.0).abs() < f64::EPSILON);
        assert!((median(&[1.0, 3.0, 9.0]) - 3.0).abs() < f64::EPSILON);
    }
}
