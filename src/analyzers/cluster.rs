// ABOUTME: K-means clustering of activities in normalized (distance, elevation) space
// ABOUTME: Too few activities for the requested cluster count yields an empty result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::algorithms::kmeans;
use crate::analysis::{Analyzer, Context};
use crate::errors::AnalysisResult;
use crate::flags::Flag;
use crate::models::{Activity, ActivityView};

const DOC: &str = "cluster returns the activities clustered by (distance, elevation) dimensions";

const DEFAULT_CLUSTERS: usize = 4;
const DEFAULT_THRESHOLD: f64 = 0.01;

/// One cluster of similar activities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Centroid in normalized (distance, elevation) space
    pub center: [f64; 2],
    /// Activities assigned to this cluster
    pub activities: Vec<ActivityView>,
}

/// K-means clustering analyzer
pub struct Cluster {
    clusters: usize,
    threshold: f64,
}

impl Cluster {
    /// Analyzer with the default cluster count and convergence threshold
    #[must_use]
    pub fn new() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for Cluster {
    fn name(&self) -> &'static str {
        "cluster"
    }

    fn doc(&self) -> &'static str {
        DOC
    }

    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        for flag in Flag::split(self.name(), tokens)? {
            match flag.name.as_str() {
                "clusters" => self.clusters = flag.parse(self.name())?,
                "threshold" => self.threshold = flag.parse(self.name())?,
                _ => return Err(flag.unknown(self.name())),
            }
        }
        Ok(())
    }

    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value> {
        if activities.len() < self.clusters {
            warn!(
                n = activities.len(),
                clusters = self.clusters,
                "too few activities to cluster"
            );
            return Ok(serde_json::to_value(Vec::<ClusterResult>::new())?);
        }

        // Synthetic coordinates: distance and elevation in meters, each
        // scaled by the collection maximum into [0, 1].
        let max_distance = activities
            .iter()
            .map(|a| a.distance)
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE);
        let max_elevation = activities
            .iter()
            .map(|a| a.elevation_gain)
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE);
        let observations: Vec<[f64; 2]> = activities
            .iter()
            .map(|a| [a.distance / max_distance, a.elevation_gain / max_elevation])
            .collect();

        // Seeded from the input size so identical inputs partition
        // identically across runs.
        let mut rng = StdRng::seed_from_u64(observations.len() as u64);
        let partitioned = kmeans::partition(&observations, self.clusters, self.threshold, &mut rng);

        let results: Vec<ClusterResult> = partitioned
            .into_iter()
            .map(|cluster| ClusterResult {
                center: cluster.center,
                activities: cluster
                    .members
                    .iter()
                    .map(|&i| ActivityView::new(&activities[i], ctx.units))
                    .collect(),
            })
            .collect();
        Ok(serde_json::to_value(results)?)
    }
}
