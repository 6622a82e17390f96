// ABOUTME: Activity analysis engine with expression-driven partitioning and pluggable analyzers
// ABOUTME: Core library crate; acquisition, encoding, and CLI wiring live in frontend crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

#![deny(unsafe_code)]

//! # Activity Insights
//!
//! Analysis pipeline for a materialized collection of recorded activities.
//! Activities are wrapped in an immutable [`Pass`], optionally filtered and
//! partitioned into a [`Group`] tree by user-supplied key expressions, and an
//! [`Analysis`] walks the tree running the selected analyzers over every leaf.
//! Per-leaf results are merged into a nested document whose shape mirrors the
//! grouping hierarchy.
//!
//! The crate owns no expression language, storage, or transport: the
//! [`Evaluator`], [`ActivitySource`], and [`WeatherProvider`] traits are the
//! seams where those collaborators plug in.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use activity_insights::{Analysis, Catalog, Context, Pass, Units};
//!
//! # async fn demo(evaluator: impl activity_insights::Evaluator,
//! #               activities: Vec<Arc<activity_insights::Activity>>)
//! #               -> activity_insights::AnalysisResult<()> {
//! let pass = Pass::new(Units::Metric, activities);
//! let pass = pass.filter(&evaluator, r#".activity_type == "Ride""#).await?;
//! let group = pass.group_by(&evaluator, &[".start_date_local.year()"]).await?;
//!
//! let catalog = Catalog::standard_set()?;
//! let analysis = Analysis::new(catalog.select(&[])?, &[])?;
//! let document = analysis.run(&Context::new(Units::Metric), &group).await?;
//! # let _ = document;
//! # Ok(())
//! # }
//! ```

/// Error taxonomy for configuration, expression, and analyzer failures
pub mod errors;

/// Unit system selection and presentation conversions
pub mod units;

/// Raw activity records and the derived presentation view
pub mod models;

/// Expression evaluator seam (filtering and key mapping)
pub mod eval;

/// Activity acquisition seam
pub mod source;

/// Weather provider seam consumed by the forecast analyzer
pub mod weather;

/// Immutable pass over activities with expression filtering
pub mod pass;

/// Recursive partition tree built by successive key expressions
pub mod group;

/// `--name value` flag token handling shared by analyzers
pub mod flags;

/// Explicit analyzer catalog with standard/full membership tagging
pub mod catalog;

/// Analyzer contract, run context, and the orchestrator
pub mod analysis;

/// Pure statistical algorithms consumed by analyzers
pub mod algorithms;

/// Built-in analyzers
pub mod analyzers;

pub use analysis::{Analysis, Analyzer, Context};
pub use catalog::Catalog;
pub use errors::{AnalysisError, AnalysisResult};
pub use eval::Evaluator;
pub use group::Group;
pub use models::{Activity, ActivityView};
pub use pass::Pass;
pub use source::ActivitySource;
pub use units::Units;
pub use weather::{Forecast, WeatherProvider};
