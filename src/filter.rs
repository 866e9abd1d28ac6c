//! Path filtering for diff results.
//!
//! This module provides glob-style pattern matching to filter diff results,
//! allowing users to ignore specific paths or focus on particular areas.
//!
//! # Pattern Syntax
//!
//! - `foo` - matches the object key "foo"
//! - `3` or `[3]` - matches array index 3
//! - `*` - matches any single path segment
//! - `**` - matches any number of path segments (including zero)
//! - `foo.bar` - matches nested path "foo.bar"
//! - `**.version` - matches "version" at any depth
//!
//! # Examples
//!
//! ```
//! use jdiff::filter::PathPattern;
//! use jdiff::PathSegment;
//!
//! let pattern = PathPattern::parse("metadata.timestamp");
//! assert!(pattern.matches(&[PathSegment::key("metadata"), PathSegment::key("timestamp")]));
//!
//! let pattern = PathPattern::parse("**.version");
//! assert!(pattern.matches(&[PathSegment::key("package"), PathSegment::key("version")]));
//! ```

use crate::diff::{DiffSummary, Difference, PathSegment};

/// A single segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Matches an exact key or index
    Literal(String),
    /// Matches any single path segment (*)
    SingleWildcard,
    /// Matches any number of path segments (**)
    DoubleWildcard,
}

impl PatternSegment {
    fn matches(&self, segment: &PathSegment) -> bool {
        match self {
            PatternSegment::Literal(lit) => match segment {
                PathSegment::Key(key) => lit == key,
                PathSegment::Index(index) => {
                    lit == &index.to_string() || lit == &format!("[{}]", index)
                }
            },
            PatternSegment::SingleWildcard | PatternSegment::DoubleWildcard => true,
        }
    }
}

/// A compiled path pattern for matching against diff paths.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('.')
            .map(|s| match s {
                "**" => PatternSegment::DoubleWildcard,
                "*" => PatternSegment::SingleWildcard,
                _ => PatternSegment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    pub fn matches(&self, path: &[PathSegment]) -> bool {
        Self::matches_recursive(&self.segments, path)
    }

    fn matches_recursive(pattern: &[PatternSegment], path: &[PathSegment]) -> bool {
        match (pattern.first(), path.first()) {
            (None, None) => true,
            (None, Some(_)) => false,
            (Some(_), None) => pattern
                .iter()
                .all(|s| matches!(s, PatternSegment::DoubleWildcard)),
            (Some(seg), Some(path_seg)) => match seg {
                PatternSegment::DoubleWildcard => {
                    Self::matches_recursive(&pattern[1..], path)
                        || Self::matches_recursive(pattern, &path[1..])
                }
                _ => {
                    seg.matches(path_seg) && Self::matches_recursive(&pattern[1..], &path[1..])
                }
            },
        }
    }
}

/// Configuration for filtering diff results.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns for paths to ignore (exclude from output)
    pub ignore_patterns: Vec<PathPattern>,
    /// Patterns for paths to include (if non-empty, only these are shown)
    pub only_patterns: Vec<PathPattern>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, pattern: &str) -> Self {
        self.ignore_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn only(mut self, pattern: &str) -> Self {
        self.only_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn has_filters(&self) -> bool {
        !self.ignore_patterns.is_empty() || !self.only_patterns.is_empty()
    }

    pub fn should_include(&self, path: &[PathSegment]) -> bool {
        for pattern in &self.ignore_patterns {
            if pattern.matches(path) {
                return false;
            }
        }

        // If only patterns are specified, at least one must match
        if !self.only_patterns.is_empty() {
            return self.only_patterns.iter().any(|p| p.matches(path));
        }

        true
    }
}

/// Filters a diff summary, recomputing the flag, total, and per-kind counts
/// for the surviving records.
pub fn filter_diff(summary: &DiffSummary, config: &FilterConfig) -> DiffSummary {
    if !config.has_filters() {
        return summary.clone();
    }

    let filtered: Vec<Difference> = summary
        .differences
        .iter()
        .filter(|difference| config.should_include(&difference.path))
        .cloned()
        .collect();

    DiffSummary::from_differences(filtered)
}
