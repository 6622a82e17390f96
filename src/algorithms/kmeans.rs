// ABOUTME: Lloyd's k-means partitioning over 2-D observations
// ABOUTME: Seeded centroid init keeps identical inputs producing identical partitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use rand::seq::index::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Iteration cap when the reassignment fraction never reaches the threshold
const MAX_ITERATIONS: usize = 100;

/// One cluster: its centroid and the indices of member observations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster centroid
    pub center: [f64; 2],
    /// Indices into the observation slice
    pub members: Vec<usize>,
}

/// Partition 2-D observations into `k` clusters.
///
/// Iterative Lloyd's algorithm: centroids start on `k` distinct observations
/// sampled with the supplied RNG, points are reassigned to the nearest
/// centroid, and centroids move to their members' mean. Iteration stops when
/// the fraction of reassigned points in the last iteration is at or below
/// `threshold`, or after a bounded iteration count.
///
/// Returns an empty vector when there are fewer observations than clusters
/// or `k` is zero; the caller decides whether that is a warning.
#[must_use]
pub fn partition(
    observations: &[[f64; 2]],
    k: usize,
    threshold: f64,
    rng: &mut impl Rng,
) -> Vec<Cluster> {
    if k == 0 || observations.len() < k {
        return Vec::new();
    }

    let mut clusters: Vec<Cluster> = sample(rng, observations.len(), k)
        .into_iter()
        .map(|i| Cluster {
            center: observations[i],
            members: Vec::new(),
        })
        .collect();

    let mut assignment = vec![usize::MAX; observations.len()];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = 0usize;
        for cluster in &mut clusters {
            cluster.members.clear();
        }
        for (i, obs) in observations.iter().enumerate() {
            let nearest = nearest_cluster(&clusters, obs);
            if assignment[i] != nearest {
                changed += 1;
                assignment[i] = nearest;
            }
            clusters[nearest].members.push(i);
        }
        for cluster in &mut clusters {
            if cluster.members.is_empty() {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let n = cluster.members.len() as f64;
            let (sx, sy) = cluster
                .members
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &i| {
                    (sx + observations[i][0], sy + observations[i][1])
                });
            cluster.center = [sx / n, sy / n];
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = changed as f64 / observations.len() as f64;
        if fraction <= threshold {
            break;
        }
    }
    clusters
}

fn nearest_cluster(clusters: &[Cluster], obs: &[f64; 2]) -> usize {
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for (i, cluster) in clusters.iter().enumerate() {
        let dx = cluster.center[0] - obs[0];
        let dy = cluster.center[1] - obs[1];
        let d = dx.mul_add(dx, dy * dy);
        if d < best {
            best = d;
            nearest = i;
        }
    }
    nearest
}
