// ABOUTME: Unified error taxonomy for the analysis pipeline
// ABOUTME: Configuration, expression, and analyzer failures are fatal; degenerate inputs are not
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

//! Error handling for the analysis pipeline.
//!
//! Only three classes of failure propagate to the caller: configuration
//! errors (empty selection, bad flags, duplicate registration), expression
//! evaluation errors, and analyzer run errors. Degenerate inputs (empty
//! passes, too few points) are absorbed where they occur and surface as
//! empty results plus a warning, never as an error.

use thiserror::Error;

/// Unified error type for the analysis pipeline
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The resolved analyzer selection is empty
    #[error("no analyzers selected")]
    EmptySelection,

    /// A flag token stream referenced a name missing from the selection
    #[error("expected analyzer name, found '{0}'")]
    UnknownAnalyzer(String),

    /// An analyzer rejected a flag name or value during setup
    #[error("analyzer '{analyzer}': invalid flag {flag}: {message}")]
    InvalidFlag {
        /// Analyzer being configured
        analyzer: String,
        /// Offending flag token
        flag: String,
        /// Reason the value was rejected
        message: String,
    },

    /// Two analyzers were registered under the same name
    #[error("analyzer '{0}' already registered")]
    DuplicateAnalyzer(String),

    /// The expression evaluator failed to parse or evaluate an expression
    #[error("expression evaluation failed: {0}")]
    Expression(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An analyzer's run returned an error; the whole analysis aborts
    #[error("analyzer '{name}' failed")]
    Analyzer {
        /// Name of the failing analyzer
        name: String,
        /// Underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The run deadline elapsed while an analyzer was waiting on a collaborator
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// An activity source failed to materialize activities
    #[error("activity source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A result failed to serialize into the nested document
    #[error("result serialization failed")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Wrap a collaborator failure as an expression error
    pub fn expression(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Expression(Box::new(err))
    }

    /// Wrap a failure from the named analyzer
    pub fn analyzer(
        name: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Analyzer {
            name: name.into(),
            source: Box::new(err),
        }
    }
}

/// Result type alias for the analysis pipeline
pub type AnalysisResult<T> = Result<T, AnalysisError>;
