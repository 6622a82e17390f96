// ABOUTME: Built-in analyzers operating over a leaf's flat activity list
// ABOUTME: Each is registered in the catalog with a standard-membership flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

/// Activities whose distance exceeds the athlete's age in years
pub mod ageride;

/// Leading-digit distribution of distances against Benford's law
pub mod benford;

/// Activities exceeding the elevation-to-distance golden ratio
pub mod climbing;

/// K-means clustering over (distance, elevation)
pub mod cluster;

/// Eddington number over distances
pub mod eddington;

/// Festive 500: 500 km between December 24 and 31
pub mod festive500;

/// Per-activity weather forecasts from a provider collaborator
pub mod forecast;

/// Longest distance at or above the average speed
pub mod hourrecord;

/// Overall rank-1 segment achievements
pub mod koms;

/// Largest hypotenuse of distance and elevation
pub mod pythagorean;

/// Maximal accumulated distance over a sliding window of activities
pub mod rolling;

/// Every activity rendered in the active units
pub mod splat;

/// Aggregate distance, elevation, time, and century counts
pub mod totals;
