// ABOUTME: Recursive partition tree over a pass, built by successive key expressions
// ABOUTME: Leaves carry the activities analyzers consume; parents are exact partitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::errors::{AnalysisError, AnalysisResult};
use crate::eval::Evaluator;
use crate::models::Activity;
use crate::pass::Pass;

/// A node in the partition tree over a [`Pass`].
///
/// The root has an empty key and level 0; each nesting step increases the
/// level by exactly one. At any node the parent's activities are exactly the
/// union of its children's (a partition: no overlap, no omission). Only leaf
/// nodes are consumed by analyzers.
///
/// Children are keyed in sorted order for deterministic output, but callers
/// must not rely on any particular ordering.
#[derive(Debug, Clone)]
pub struct Group {
    /// Key this node was bucketed under (empty for the root)
    pub key: String,
    /// Activities partitioned into this node
    pub pass: Pass,
    /// Child groups, one per distinct key at the next level
    pub children: Vec<Group>,
    /// Nesting depth; the root is 0
    pub level: usize,
}

impl Group {
    /// Build a partition tree of depth `exprs.len()` over a pass.
    ///
    /// At each level the evaluator maps every activity in the current pass to
    /// a string key in one batched call; activities sharing a key form one
    /// child pass. With no expressions the result is a childless root (itself
    /// a leaf) wrapping the full pass. An empty pass yields a valid group.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Expression`] when any key computation fails;
    /// no partial tree is produced.
    pub async fn by(
        evaluator: &dyn Evaluator,
        pass: &Pass,
        exprs: &[&str],
    ) -> AnalysisResult<Self> {
        let start = Instant::now();
        let mut root = Self {
            key: String::new(),
            pass: pass.clone(),
            children: Vec::new(),
            level: 0,
        };
        partition(evaluator, &mut root, exprs).await?;
        debug!(
            depth = exprs.len(),
            activities = pass.activities.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "groupby"
        );
        Ok(root)
    }

    /// Whether this node is a leaf (no children)
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first pre-order traversal
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

fn partition<'a>(
    evaluator: &'a dyn Evaluator,
    group: &'a mut Group,
    exprs: &'a [&'a str],
) -> Pin<Box<dyn Future<Output = AnalysisResult<()>> + Send + 'a>> {
    Box::pin(async move {
        let Some((expr, tail)) = exprs.split_first() else {
            return Ok(());
        };
        let keys = evaluator
            .map_keys(expr, &group.pass.activities)
            .await
            .map_err(AnalysisError::Expression)?;
        debug!(expr, keys = keys.len(), "groupby level");

        // Sorted buckets keep the tree deterministic across runs.
        let mut buckets: BTreeMap<String, Vec<Arc<Activity>>> = BTreeMap::new();
        for (key, activity) in keys.into_iter().zip(&group.pass.activities) {
            buckets.entry(key).or_default().push(Arc::clone(activity));
        }

        for (key, activities) in buckets {
            let mut child = Group {
                key,
                pass: Pass::new(group.pass.units, activities),
                children: Vec::new(),
                level: group.level + 1,
            };
            if !tail.is_empty() {
                partition(evaluator, &mut child, tail).await?;
            }
            group.children.push(child);
        }
        Ok(())
    })
}
