// ABOUTME: Benford's-law leading-digit distribution with chi-squared fit
// ABOUTME: Guards empty and all-non-positive inputs against division by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use serde::{Deserialize, Serialize};

/// Canonical Benford leading-digit distribution for digits 1 through 9
pub const REFERENCE: [f64; 9] = [0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046];

/// Observed leading-digit distribution and its fit against Benford's law
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Benford {
    /// Normalized observed frequency of leading digits 1 through 9
    pub distribution: [f64; 9],
    /// Chi-squared statistic against [`REFERENCE`]
    pub chi_squared: f64,
}

/// Compute the leading-digit distribution and chi-squared statistic.
///
/// Each value is reduced to its leading decimal digit by dividing by 10 until
/// it is below 10; non-positive values are ignored. An input with no positive
/// values yields a zero distribution and a zero statistic.
#[must_use]
pub fn law(values: &[i64]) -> Benford {
    let mut histogram = [0u64; 9];
    for &value in values {
        if value <= 0 {
            continue;
        }
        let mut v = value;
        while v >= 10 {
            v /= 10;
        }
        #[allow(clippy::cast_sign_loss)]
        let digit = v as usize;
        histogram[digit - 1] += 1;
    }

    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return Benford::default();
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut distribution = [0.0_f64; 9];
    let mut chi_squared = 0.0_f64;
    for (i, &count) in histogram.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let observed = count as f64 / total;
        distribution[i] = observed;
        let expected = REFERENCE[i];
        chi_squared += (observed - expected).powi(2) / expected;
    }
    Benford {
        distribution,
        chi_squared,
    }
}
