// ABOUTME: Analyzer contract, run context, and the tree-walking orchestrator
// ABOUTME: Flattens the pre-order walk into tuples, then stack-merges the nested document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

//! Analysis orchestration.
//!
//! Analyzers never see the partition tree: each one receives a flat activity
//! slice for a single leaf. The orchestrator alone reconstructs hierarchy by
//! recording one `(key, level, results)` tuple per visited node during a
//! pre-order walk and merging the tuple list in a single pass with a stack of
//! partially built mappings.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{AnalysisError, AnalysisResult};
use crate::flags::{self, Flag};
use crate::group::Group;
use crate::models::Activity;
use crate::pass::Pass;
use crate::units::Units;

/// Per-run context carried into every analyzer invocation.
///
/// Analyzers needing distance, elevation, or speed conversion must consult
/// `units` rather than hardcoding a unit system. The deadline is observed
/// only by analyzers that block on collaborators (forecast); pure in-memory
/// analyzers run in bounded time and ignore it.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Active unit system
    pub units: Units,
    /// Optional deadline for collaborator-bound analyzers
    pub deadline: Option<Instant>,
}

impl Context {
    /// Create a context with no deadline
    #[must_use]
    pub fn new(units: Units) -> Self {
        Self {
            units,
            deadline: None,
        }
    }

    /// Attach a deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Whether the deadline has elapsed
    #[must_use]
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// A named, independently configurable computation over a flat activity list.
///
/// Flags are applied once during setup via [`Analyzer::configure`]; `run`
/// takes `&self` and must not retain state between invocations.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Unique analyzer name used for selection and result keying
    fn name(&self) -> &'static str;

    /// Free-text description of what the analyzer computes
    fn doc(&self) -> &'static str;

    /// Apply `--name value` flag tokens during setup.
    ///
    /// The default implementation rejects any flag, for analyzers with no
    /// parameters.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidFlag`] on unknown names or unparsable
    /// values; flag errors are fatal and surface before any analyzer runs.
    fn configure(&mut self, tokens: &[String]) -> AnalysisResult<()> {
        if let Some(flag) = Flag::split(self.name(), tokens)?.first() {
            return Err(flag.unknown(self.name()));
        }
        Ok(())
    }

    /// Run the computation over a leaf's activities.
    ///
    /// # Errors
    /// Any error aborts the entire analysis; degenerate inputs must instead
    /// produce an empty result.
    async fn run(&self, ctx: &Context, activities: &[Arc<Activity>]) -> AnalysisResult<Value>;
}

impl std::fmt::Debug for dyn Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").field("name", &self.name()).finish()
    }
}

/// One recorded tuple per visited tree node
struct NodeRecord {
    key: String,
    level: usize,
    results: Option<Value>,
}

/// A configured analyzer selection ready to run over a group tree.
#[derive(Debug)]
pub struct Analysis {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Analysis {
    /// Create an analysis from selected analyzers and a flag token stream.
    ///
    /// `args` uses the routing contract described in [`crate::flags`]: an
    /// analyzer name followed by that analyzer's flags. Flags are applied
    /// here, once; they are read-only for the lifetime of the analysis.
    ///
    /// # Errors
    /// Returns [`AnalysisError::EmptySelection`] for an empty selection,
    /// [`AnalysisError::UnknownAnalyzer`] for an unroutable token, or an
    /// [`AnalysisError::InvalidFlag`] from an analyzer's `configure`.
    pub fn new(mut analyzers: Vec<Box<dyn Analyzer>>, args: &[String]) -> AnalysisResult<Self> {
        if analyzers.is_empty() {
            return Err(AnalysisError::EmptySelection);
        }
        if !args.is_empty() {
            let names: Vec<&str> = analyzers.iter().map(|a| a.name()).collect();
            let mut routed = flags::route(&names, args)?;
            for analyzer in &mut analyzers {
                if let Some(tokens) = routed.remove(analyzer.name()) {
                    analyzer.configure(&tokens)?;
                }
            }
        }
        Ok(Self { analyzers })
    }

    /// Names of the selected analyzers, in execution order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Run every analyzer over a single pass, as an implicit leaf root.
    ///
    /// The resulting document nests the per-analyzer mapping under the root's
    /// empty key: `{"": {analyzer: result}}`.
    ///
    /// # Errors
    /// Propagates the first analyzer failure.
    pub async fn run_pass(&self, ctx: &Context, pass: &Pass) -> AnalysisResult<Value> {
        let root = Group {
            key: String::new(),
            pass: pass.clone(),
            children: Vec::new(),
            level: 0,
        };
        self.run(ctx, &root).await
    }

    /// Walk a group tree and assemble the nested result document.
    ///
    /// Depth-first pre-order: internal nodes record a placeholder tuple, leaf
    /// nodes run every analyzer in selection order over the leaf's
    /// activities. The walk is strictly sequential, which the merge step
    /// depends on. Holds no state across invocations, so re-running identical
    /// input yields an identical document.
    ///
    /// # Errors
    /// The first analyzer failure aborts the run; no partial document is
    /// returned, including results from already-completed sibling leaves.
    pub async fn run(&self, ctx: &Context, root: &Group) -> AnalysisResult<Value> {
        let start = Instant::now();
        let mut records: Vec<NodeRecord> = Vec::new();

        // Explicit stack keeps pre-order without async recursion; children
        // are pushed in reverse so siblings pop in tree order.
        let mut pending: Vec<&Group> = vec![root];
        while let Some(node) = pending.pop() {
            if node.is_leaf() {
                let results = self.run_leaf(ctx, &node.pass.activities).await?;
                records.push(NodeRecord {
                    key: node.key.clone(),
                    level: node.level,
                    results: Some(Value::Object(results)),
                });
            } else {
                records.push(NodeRecord {
                    key: node.key.clone(),
                    level: node.level,
                    results: None,
                });
                pending.extend(node.children.iter().rev());
            }
        }

        let document = collect(records);
        debug!(
            analyzers = self.analyzers.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "analysis"
        );
        Ok(document)
    }

    /// Run the full selection over one leaf's activities
    async fn run_leaf(
        &self,
        ctx: &Context,
        activities: &[Arc<Activity>],
    ) -> AnalysisResult<Map<String, Value>> {
        let mut results = Map::new();
        for analyzer in &self.analyzers {
            let value = analyzer.run(ctx, activities).await?;
            results.insert(analyzer.name().to_owned(), value);
        }
        Ok(results)
    }
}

/// A partially built mapping awaiting insertion into its parent
struct Frame {
    key: String,
    map: Map<String, Value>,
    /// Leaf results that replace the mapping when the frame closes
    results: Option<Value>,
}

impl Frame {
    fn close(self) -> (String, Value) {
        let value = self.results.unwrap_or(Value::Object(self.map));
        (self.key, value)
    }
}

/// Merge the flat tuple list into the nested document.
///
/// Single pass with a stack of frames indexed by depth: truncating to the
/// tuple's level closes any deeper, already-finished subtree; a frame is
/// pushed when the stack length equals the level; leaf results land under the
/// tuple's key in the mapping at `max(level - 1, 0)`. Requires the strict
/// pre-order, contiguous-siblings tuple order produced by the walk.
fn collect(records: Vec<NodeRecord>) -> Value {
    let mut stack: Vec<Frame> = Vec::new();
    for record in records {
        while stack.len() > record.level {
            if stack.len() == 1 {
                break;
            }
            let (key, value) = match stack.pop() {
                Some(frame) => frame.close(),
                None => break,
            };
            if let Some(parent) = stack.last_mut() {
                parent.map.insert(key, value);
            }
        }
        if stack.len() == record.level {
            stack.push(Frame {
                key: record.key.clone(),
                map: Map::new(),
                results: None,
            });
        }
        if let Some(results) = record.results {
            if record.level == 0 {
                if let Some(root) = stack.first_mut() {
                    root.map.insert(record.key, results);
                }
            } else if let Some(frame) = stack.last_mut() {
                frame.results = Some(results);
            }
        }
    }
    while stack.len() > 1 {
        let (key, value) = match stack.pop() {
            Some(frame) => frame.close(),
            None => break,
        };
        if let Some(parent) = stack.last_mut() {
            parent.map.insert(key, value);
        }
    }
    match stack.pop() {
        Some(root) => Value::Object(root.map),
        None => Value::Object(Map::new()),
    }
}
