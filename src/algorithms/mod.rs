// ABOUTME: Pure statistical algorithms consumed by analyzers
// ABOUTME: No I/O, no unit conversion; plain numeric inputs and serializable outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

/// Incremental Eddington number computation
pub mod eddington;

/// Benford's-law leading-digit distribution and chi-squared test
pub mod benford;

/// Lloyd's k-means partitioning over 2-D observations
pub mod kmeans;
