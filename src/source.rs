// ABOUTME: Activity acquisition seam
// ABOUTME: The pipeline assumes activities are fully materialized before a pass is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AnalysisError, AnalysisResult};
use crate::models::Activity;

/// Supplies the materialized activity collection a pass is built from.
///
/// Acquisition, persistence, and provider authentication live behind this
/// seam; the pipeline only reads.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Read every stored activity.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Source`] when the backing store fails.
    async fn read_all(&self) -> AnalysisResult<Vec<Arc<Activity>>>;
}

impl AnalysisError {
    /// Wrap a storage collaborator failure
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}
