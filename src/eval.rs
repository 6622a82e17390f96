// ABOUTME: Expression evaluator seam consumed by filtering and grouping
// ABOUTME: Field syntax, operators, and built-ins are owned entirely by the implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

//! Expression evaluation seam.
//!
//! The pipeline never embeds an expression language. Filtering and grouping
//! delegate to an [`Evaluator`] implementation and propagate its errors
//! verbatim, which also lets the core be tested against a trivial stub.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Activity;

/// Boxed collaborator error propagated verbatim through the pipeline
pub type EvalError = Box<dyn std::error::Error + Send + Sync>;

/// Evaluates boolean and key expressions against activity collections.
///
/// Both operations are batched over the whole collection: one evaluator call
/// covers every activity at a given filtering or grouping step.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Filter the activities by a boolean expression, preserving input order.
    ///
    /// # Errors
    /// Returns the evaluator's own error when the expression fails to parse
    /// or evaluate for any activity; no partial result is produced.
    async fn filter(
        &self,
        expr: &str,
        activities: &[Arc<Activity>],
    ) -> Result<Vec<Arc<Activity>>, EvalError>;

    /// Map every activity to a string key, aligned with input order.
    ///
    /// # Errors
    /// Returns the evaluator's own error when any per-activity key
    /// computation fails; no partial result is produced.
    async fn map_keys(
        &self,
        expr: &str,
        activities: &[Arc<Activity>],
    ) -> Result<Vec<String>, EvalError>;
}
