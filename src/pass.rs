// ABOUTME: Immutable pass over activities with expression-driven filtering
// ABOUTME: Passes share activity records read-only; filtering never mutates input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::errors::{AnalysisError, AnalysisResult};
use crate::eval::Evaluator;
use crate::group::Group;
use crate::models::Activity;
use crate::units::Units;

/// An immutable (units, ordered activities) value.
///
/// Created once per filter or group-by step and never mutated afterwards.
/// Activities are shared via `Arc`, so overlapping passes are cheap and free
/// of ownership conflicts.
#[derive(Debug, Clone)]
pub struct Pass {
    /// Unit system applied when presenting results derived from this pass
    pub units: Units,
    /// Ordered activities
    pub activities: Vec<Arc<Activity>>,
}

impl Pass {
    /// Create a pass over an ordered activity collection
    #[must_use]
    pub fn new(units: Units, activities: Vec<Arc<Activity>>) -> Self {
        Self { units, activities }
    }

    /// Filter the pass by a boolean expression.
    ///
    /// Returns a new pass containing the subsequence for which the predicate
    /// holds, preserving order and units.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Expression`] when the evaluator cannot parse
    /// or evaluate the expression; no partial pass is produced.
    pub async fn filter(&self, evaluator: &dyn Evaluator, expr: &str) -> AnalysisResult<Self> {
        let start = Instant::now();
        let pre = self.activities.len();
        let activities = evaluator
            .filter(expr, &self.activities)
            .await
            .map_err(AnalysisError::Expression)?;
        debug!(
            expr,
            pre,
            post = activities.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "filter"
        );
        Ok(Self {
            units: self.units,
            activities,
        })
    }

    /// Partition the pass into a group tree by successive key expressions.
    ///
    /// See [`Group::by`] for the partitioning contract.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Expression`] when any key computation fails;
    /// no partial tree is produced.
    pub async fn group_by(
        &self,
        evaluator: &dyn Evaluator,
        exprs: &[&str],
    ) -> AnalysisResult<Group> {
        Group::by(evaluator, self, exprs).await
    }
}
