// ABOUTME: Explicit analyzer catalog constructed once and passed by reference
// ABOUTME: Tagged registration with a default-membership flag, validated for name collisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

//! Analyzer catalog.
//!
//! The catalog is an explicit object, never package-level mutable state.
//! Each registration carries the analyzer's identity plus an explicit
//! standard-membership flag, and name collisions are rejected at registration
//! time. Selection hands out fresh analyzer instances so flag configuration
//! on one analysis never leaks into another.

use std::sync::Arc;

use tracing::warn;

use crate::analysis::Analyzer;
use crate::analyzers;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::weather::WeatherProvider;

type Factory = Box<dyn Fn() -> Box<dyn Analyzer> + Send + Sync>;

struct Entry {
    name: &'static str,
    standard: bool,
    factory: Factory,
}

/// Registry of available analyzers with standard/full membership tagging.
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Catalog pre-populated with every built-in analyzer.
    ///
    /// The standard subset mirrors the analyzers a caller gets with no
    /// explicit selection; the rest are opt-in by name. The forecast analyzer
    /// needs a weather provider and is added via [`Catalog::with_weather`].
    ///
    /// # Errors
    /// Returns [`AnalysisError::DuplicateAnalyzer`] if two registrations
    /// collide, which would indicate a programming error in the built-ins.
    pub fn standard_set() -> AnalysisResult<Self> {
        let mut catalog = Self::new();
        catalog.register(false, || Box::new(analyzers::ageride::AgeRide::new()))?;
        catalog.register(false, || Box::new(analyzers::benford::BenfordAnalyzer))?;
        catalog.register(true, || Box::new(analyzers::climbing::Climbing::new()))?;
        catalog.register(false, || Box::new(analyzers::cluster::Cluster::new()))?;
        catalog.register(true, || Box::new(analyzers::eddington::EddingtonAnalyzer))?;
        catalog.register(true, || Box::new(analyzers::festive500::Festive500))?;
        catalog.register(true, || Box::new(analyzers::hourrecord::HourRecord))?;
        catalog.register(true, || Box::new(analyzers::koms::Koms))?;
        catalog.register(true, || Box::new(analyzers::pythagorean::Pythagorean))?;
        catalog.register(true, || Box::new(analyzers::rolling::Rolling::new()))?;
        catalog.register(false, || Box::new(analyzers::splat::Splat))?;
        catalog.register(true, || Box::new(analyzers::totals::Totals))?;
        Ok(catalog)
    }

    /// Add the forecast analyzer backed by a weather provider.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DuplicateAnalyzer`] if forecast was already
    /// registered.
    pub fn with_weather(mut self, provider: Arc<dyn WeatherProvider>) -> AnalysisResult<Self> {
        self.register(false, move || {
            Box::new(analyzers::forecast::ForecastAnalyzer::new(Arc::clone(&provider)))
        })?;
        Ok(self)
    }

    /// Register an analyzer factory with its standard-membership flag.
    ///
    /// The factory is invoked once here to learn the analyzer's name and
    /// validate uniqueness.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DuplicateAnalyzer`] on a name collision.
    pub fn register(
        &mut self,
        standard: bool,
        factory: impl Fn() -> Box<dyn Analyzer> + Send + Sync + 'static,
    ) -> AnalysisResult<()> {
        let name = factory().name();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(AnalysisError::DuplicateAnalyzer(name.to_owned()));
        }
        self.entries.push(Entry {
            name,
            standard,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Names of every registered analyzer
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Documentation string for a registered analyzer
    #[must_use]
    pub fn doc(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)().doc().to_owned())
    }

    /// Select analyzers by name, instantiating fresh instances.
    ///
    /// An empty name list selects the standard subset. Unknown names are
    /// skipped with a warning rather than failing the whole selection.
    ///
    /// # Errors
    /// Returns [`AnalysisError::EmptySelection`] when the resolved selection
    /// is empty.
    pub fn select(&self, names: &[&str]) -> AnalysisResult<Vec<Box<dyn Analyzer>>> {
        let mut selected: Vec<Box<dyn Analyzer>> = Vec::new();
        if names.is_empty() {
            for entry in self.entries.iter().filter(|e| e.standard) {
                selected.push((entry.factory)());
            }
        } else {
            for name in names {
                match self.entries.iter().find(|e| e.name == *name) {
                    Some(entry) => selected.push((entry.factory)()),
                    None => warn!(name = *name, "missing analyzer"),
                }
            }
        }
        if selected.is_empty() {
            return Err(AnalysisError::EmptySelection);
        }
        Ok(selected)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
