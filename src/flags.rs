// ABOUTME: Flag token handling shared by analyzers
// ABOUTME: Splits `--name value` streams into pairs and routes them by analyzer name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Activity Insights Contributors

//! Analyzer flag handling.
//!
//! Analyzer arguments arrive as one flat token stream in the original CLI
//! contract: an analyzer name, followed by that analyzer's flags, optionally
//! followed by further name/flag runs:
//!
//! ```text
//! rolling --window 3 cluster --clusters 2 --threshold 0.05
//! ```
//!
//! [`route`] splits the stream per analyzer; [`Flag::split`] turns one
//! analyzer's tokens into `(name, value)` pairs. A flag token with no
//! following value token is a boolean switch.

use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::{AnalysisError, AnalysisResult};

/// One parsed flag: its name (without the `--` prefix) and optional value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag name without the leading dashes
    pub name: String,
    /// Raw value token, absent for boolean switches
    pub value: Option<String>,
}

impl Flag {
    /// Split one analyzer's token run into flags.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidFlag`] when a value token appears with
    /// no preceding flag name.
    pub fn split(analyzer: &str, tokens: &[String]) -> AnalysisResult<Vec<Self>> {
        let mut flags: Vec<Self> = Vec::new();
        for token in tokens {
            if let Some(name) = token.strip_prefix("--") {
                // `--name=value` and `--name value` are both accepted.
                match name.split_once('=') {
                    Some((name, value)) => flags.push(Self {
                        name: name.to_owned(),
                        value: Some(value.to_owned()),
                    }),
                    None => flags.push(Self {
                        name: name.to_owned(),
                        value: None,
                    }),
                }
            } else {
                let Some(last) = flags.last_mut().filter(|f| f.value.is_none()) else {
                    return Err(AnalysisError::InvalidFlag {
                        analyzer: analyzer.to_owned(),
                        flag: token.clone(),
                        message: "value token with no preceding flag".to_owned(),
                    });
                };
                last.value = Some(token.clone());
            }
        }
        Ok(flags)
    }

    /// Parse this flag's value into a typed parameter.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidFlag`] when the value is missing or
    /// fails to parse.
    pub fn parse<T>(&self, analyzer: &str) -> AnalysisResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.value.as_deref().ok_or_else(|| AnalysisError::InvalidFlag {
            analyzer: analyzer.to_owned(),
            flag: format!("--{}", self.name),
            message: "missing value".to_owned(),
        })?;
        value.parse().map_err(|e: T::Err| AnalysisError::InvalidFlag {
            analyzer: analyzer.to_owned(),
            flag: format!("--{}", self.name),
            message: e.to_string(),
        })
    }

    /// Reject a flag the analyzer does not define.
    #[must_use]
    pub fn unknown(&self, analyzer: &str) -> AnalysisError {
        AnalysisError::InvalidFlag {
            analyzer: analyzer.to_owned(),
            flag: format!("--{}", self.name),
            message: "unknown flag".to_owned(),
        }
    }
}

/// Route a flat argument stream to per-analyzer token runs.
///
/// `names` is the set of selected analyzer names; a bare `--` separator
/// token is ignored, matching the original CLI contract.
///
/// # Errors
/// Returns [`AnalysisError::UnknownAnalyzer`] when a leading token is not a
/// selected analyzer name.
pub fn route(names: &[&str], args: &[String]) -> AnalysisResult<HashMap<String, Vec<String>>> {
    let mut routed: HashMap<String, Vec<String>> = HashMap::new();
    let mut current: Option<String> = None;
    for arg in args {
        if arg == "--" {
            continue;
        }
        if names.contains(&arg.as_str()) {
            current = Some(arg.clone());
            routed.entry(arg.clone()).or_default();
            continue;
        }
        match &current {
            Some(name) => routed.entry(name.clone()).or_default().push(arg.clone()),
            None => return Err(AnalysisError::UnknownAnalyzer(arg.clone())),
        }
    }
    Ok(routed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn splits_pairs_and_switches() {
        let flags = Flag::split("rolling", &args(&["--window", "3", "--verbose"])).unwrap();
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0].name, "window");
        assert_eq!(flags[0].value.as_deref(), Some("3"));
        assert_eq!(flags[1].name, "verbose");
        assert_eq!(flags[1].value, None);
    }

    #[test]
    fn splits_equals_form() {
        let flags = Flag::split("cluster", &args(&["--clusters=2"])).unwrap();
        assert_eq!(flags[0].value.as_deref(), Some("2"));
    }

    #[test]
    fn rejects_dangling_value() {
        assert!(Flag::split("rolling", &args(&["3"])).is_err());
    }

    #[test]
    fn routes_by_analyzer_name() {
        let routed = route(
            &["rolling", "cluster"],
            &args(&["rolling", "--window", "3", "cluster", "--clusters", "2"]),
        )
        .unwrap();
        assert_eq!(routed["rolling"], args(&["--window", "3"]));
        assert_eq!(routed["cluster"], args(&["--clusters", "2"]));
    }

    #[test]
    fn rejects_unknown_leading_token() {
        let err = route(&["rolling"], &args(&["sprint", "--window", "3"])).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownAnalyzer(name) if name == "sprint"));
    }

    #[test]
    fn invalid_value_is_fatal() {
        let flags = Flag::split("rolling", &args(&["--window", "seven"])).unwrap();
        assert!(flags[0].parse::<usize>("rolling").is_err());
    }
}
