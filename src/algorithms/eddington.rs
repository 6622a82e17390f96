// ABOUTME: Incremental Eddington number over a value series
// ABOUTME: Single streaming pass, O(n), no sorting or re-scans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Eddington statistics for a value series.
///
/// The Eddington number is the largest integer E such that at least E entries
/// have a value of at least E.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Eddington {
    /// The Eddington number after the full series
    pub number: i64,
    /// Running Eddington number aligned with input order
    pub numbers: Vec<i64>,
    /// Count of not-yet-applied values keyed by value; shows how many more
    /// entries at each value would raise the number
    pub motivation: HashMap<i64, i64>,
}

/// Compute Eddington statistics in a single streaming pass.
///
/// Maintains the current number, an `above` counter, and the motivation
/// multiset. For each value: values above the current number bump `above`
/// (and the motivation entry when the value could still contribute); whenever
/// `above` exceeds the current number the number advances, consuming the
/// motivation entry for the new number.
#[must_use]
pub fn number(values: &[i64]) -> Eddington {
    let n = i64::try_from(values.len()).unwrap_or(i64::MAX);
    let mut above: i64 = 0;
    let mut e = Eddington {
        number: 0,
        numbers: Vec::with_capacity(values.len()),
        motivation: HashMap::new(),
    };
    for &value in values {
        if value > e.number {
            above += 1;
            if value < n {
                *e.motivation.entry(value).or_insert(0) += 1;
            }
            if above > e.number {
                e.number += 1;
                if let Some(applied) = e.motivation.remove(&e.number) {
                    above -= applied;
                }
            }
        }
        e.numbers.push(e.number);
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series() {
        let e = number(&[]);
        assert_eq!(e.number, 0);
        assert!(e.numbers.is_empty());
        assert!(e.motivation.is_empty());
    }

    #[test]
    fn worked_example() {
        let e = number(&[1, 2, 1, 3, 2, 2]);
        assert_eq!(e.number, 2);
        assert_eq!(e.numbers, vec![1, 1, 1, 2, 2, 2]);
        assert_eq!(e.motivation, HashMap::from([(3, 1)]));
    }

    #[test]
    fn reference_rides() {
        let rides: [f64; 30] = [
            5.43, 5.414, 32.198, 30.322, 18.117, 145.352, 22.967, 29.585, 29.939, 157.036, 24.946,
            25.303, 51.146, 23.944, 6.01, 24.4, 30.903, 39.48, 5.907, 35.825, 6.768, 71.515, 7.494,
            32.614, 23.183, 17.455, 135.918, 6.577, 27.225, 22.061,
        ];
        #[allow(clippy::cast_possible_truncation)]
        let values: Vec<i64> = rides.iter().map(|r| *r as i64).collect();
        assert_eq!(number(&values).number, 21);
    }

    #[test]
    fn running_numbers_never_decrease() {
        let e = number(&[10, 1, 10, 2, 10, 3, 10, 4]);
        for pair in e.numbers.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}
