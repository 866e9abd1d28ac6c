//! Structural diff between two JSON values.
//!
//! This module implements the logic for comparing two parsed values and
//! producing a path-addressed list of typed difference records. The algorithm
//! recursively walks both trees: kinds are classified first, so a mismatch
//! between kinds is reported as a single terminal record instead of being
//! decomposed further.
//!
//! # Examples
//!
//! ```
//! use jdiff::{compute_diff, DiffKind, DiffOptions, Value};
//!
//! let left = Value::Object(vec![("age".to_string(), Value::Number(30.0))]);
//! let right = Value::Object(vec![("age".to_string(), Value::Number(31.0))]);
//!
//! let summary = compute_diff(&left, &right, &DiffOptions::default());
//!
//! assert!(!summary.identical);
//! assert_eq!(summary.total, 1);
//! assert_eq!(summary.differences[0].kind, DiffKind::Modified);
//! ```

use crate::value::{Value, ValueKind};
use std::collections::HashSet;

/// One step into a value tree: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    pub fn key(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

/// The type of divergence a record describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffKind {
    /// The two values have different runtime kinds. Carries both kinds;
    /// the subtree is not descended into.
    TypeMismatch { left: ValueKind, right: ValueKind },
    /// Present on the right side only
    Added,
    /// Present on the left side only
    Removed,
    /// Present on both sides with different values
    Modified,
}

/// A single difference at a specific path in the tree.
///
/// `left` is `None` only for [`DiffKind::Added`] records and `right` is
/// `None` only for [`DiffKind::Removed`] records.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Path to the diverging value (e.g. `user.profile.age`, `items[0]`)
    pub path: Vec<PathSegment>,
    /// What kind of divergence this is
    pub kind: DiffKind,
    /// Value on the left side
    pub left: Option<Value>,
    /// Value on the right side
    pub right: Option<Value>,
}

/// Per-kind record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub type_mismatches: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of recorded differences.
    pub fn total_changes(&self) -> usize {
        self.type_mismatches + self.added + self.removed + self.modified
    }

    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// The complete result of one comparison.
#[derive(Debug, Clone)]
pub struct DiffSummary {
    /// All differences, in deterministic traversal order
    pub differences: Vec<Difference>,
    /// True iff no difference was found at any depth
    pub identical: bool,
    /// Number of differences
    pub total: usize,
    /// Per-kind counts
    pub stats: DiffStats,
}

impl DiffSummary {
    /// Builds a summary from a list of differences, deriving the flag,
    /// total, and per-kind counts.
    pub fn from_differences(differences: Vec<Difference>) -> Self {
        let mut stats = DiffStats::new();
        for difference in &differences {
            match difference.kind {
                DiffKind::TypeMismatch { .. } => stats.type_mismatches += 1,
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Modified => stats.modified += 1,
            }
        }

        Self {
            identical: differences.is_empty(),
            total: differences.len(),
            stats,
            differences,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identical
    }
}

/// Configuration for the diff algorithm.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Compare arrays as if element order did not matter.
    ///
    /// Both arrays are sorted by the canonical text of their elements before
    /// pairwise index comparison. This approximates order-independent
    /// diffing without element alignment: elements are paired by sorted
    /// position, not by best match, so a lone differing element can show up
    /// as several index-aligned differences.
    pub ignore_array_order: bool,
    /// Case-fold strings before comparing them
    pub ignore_string_case: bool,
}

/// Computes the structural diff between two values.
///
/// This is the main entry point for the diff algorithm. It never fails for
/// well-formed values; parsing and validation are the caller's
/// responsibility. Two runs over identical inputs and options produce
/// identical record sequences.
///
/// # Arguments
///
/// * `left` - The left/old value
/// * `right` - The right/new value
/// * `options` - Comparison options
///
/// # Examples
///
/// ```
/// use jdiff::{compute_diff, DiffOptions, Value};
///
/// let summary = compute_diff(&Value::Number(42.0), &Value::Number(43.0), &DiffOptions::default());
/// assert_eq!(summary.stats.modified, 1);
/// ```
pub fn compute_diff(left: &Value, right: &Value, options: &DiffOptions) -> DiffSummary {
    let mut differences = Vec::new();
    diff_values(left, right, Vec::new(), &mut differences, options);
    DiffSummary::from_differences(differences)
}

/// Recursively compares two values and collects differences.
///
/// Kinds are classified before anything else. A kind mismatch is one
/// terminal record; matching container kinds recurse, matching primitive
/// kinds compare directly.
fn diff_values(
    left: &Value,
    right: &Value,
    path: Vec<PathSegment>,
    differences: &mut Vec<Difference>,
    options: &DiffOptions,
) {
    let left_kind = left.kind();
    let right_kind = right.kind();

    if left_kind != right_kind {
        differences.push(Difference {
            path,
            kind: DiffKind::TypeMismatch {
                left: left_kind,
                right: right_kind,
            },
            left: Some(left.clone()),
            right: Some(right.clone()),
        });
        return;
    }

    match (left, right) {
        (Value::Object(left_entries), Value::Object(right_entries)) => {
            diff_objects(left_entries, right_entries, path, differences, options);
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            diff_arrays(left_items, right_items, path, differences, options);
        }
        _ => {
            if !primitives_equal(left, right, options) {
                differences.push(Difference {
                    path,
                    kind: DiffKind::Modified,
                    left: Some(left.clone()),
                    right: Some(right.clone()),
                });
            }
        }
    }
}

/// Compares two objects entry by entry.
///
/// Walks the union of keys from both sides in left-then-right first-seen
/// order. Keys absent on the left become `Added` records, keys absent on the
/// right become `Removed` records, and keys present on both sides recurse.
fn diff_objects(
    left_entries: &[(String, Value)],
    right_entries: &[(String, Value)],
    path: Vec<PathSegment>,
    differences: &mut Vec<Difference>,
    options: &DiffOptions,
) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys: Vec<&str> = Vec::new();
    for (key, _) in left_entries.iter().chain(right_entries.iter()) {
        if seen.insert(key) {
            keys.push(key);
        }
    }

    for key in keys {
        let left_value = object_get(left_entries, key);
        let right_value = object_get(right_entries, key);

        let mut child_path = path.clone();
        child_path.push(PathSegment::key(key));

        match (left_value, right_value) {
            (None, Some(value)) => differences.push(Difference {
                path: child_path,
                kind: DiffKind::Added,
                left: None,
                right: Some(value.clone()),
            }),
            (Some(value), None) => differences.push(Difference {
                path: child_path,
                kind: DiffKind::Removed,
                left: Some(value.clone()),
                right: None,
            }),
            (Some(left_value), Some(right_value)) => {
                diff_values(left_value, right_value, child_path, differences, options);
            }
            (None, None) => unreachable!("key came from the union of both objects"),
        }
    }
}

fn object_get<'a>(entries: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Compares two arrays.
///
/// In the default mode elements are paired by original index. In
/// order-insensitive mode each side is first stable-sorted by the canonical
/// text of its elements, then paired by sorted position. In both modes,
/// indices past the shorter array's length become `Added` or `Removed`
/// records.
fn diff_arrays(
    left_items: &[Value],
    right_items: &[Value],
    path: Vec<PathSegment>,
    differences: &mut Vec<Difference>,
    options: &DiffOptions,
) {
    if options.ignore_array_order {
        let mut left_sorted: Vec<&Value> = left_items.iter().collect();
        let mut right_sorted: Vec<&Value> = right_items.iter().collect();
        left_sorted.sort_by_cached_key(|item| item.canonical_string());
        right_sorted.sort_by_cached_key(|item| item.canonical_string());
        diff_array_items(&left_sorted, &right_sorted, path, differences, options);
    } else {
        let left_refs: Vec<&Value> = left_items.iter().collect();
        let right_refs: Vec<&Value> = right_items.iter().collect();
        diff_array_items(&left_refs, &right_refs, path, differences, options);
    }
}

fn diff_array_items(
    left_items: &[&Value],
    right_items: &[&Value],
    path: Vec<PathSegment>,
    differences: &mut Vec<Difference>,
    options: &DiffOptions,
) {
    let min_len = left_items.len().min(right_items.len());

    for index in 0..min_len {
        let mut child_path = path.clone();
        child_path.push(PathSegment::Index(index));
        diff_values(
            left_items[index],
            right_items[index],
            child_path,
            differences,
            options,
        );
    }

    for (index, item) in left_items.iter().enumerate().skip(min_len) {
        let mut child_path = path.clone();
        child_path.push(PathSegment::Index(index));
        differences.push(Difference {
            path: child_path,
            kind: DiffKind::Removed,
            left: Some((*item).clone()),
            right: None,
        });
    }

    for (index, item) in right_items.iter().enumerate().skip(min_len) {
        let mut child_path = path.clone();
        child_path.push(PathSegment::Index(index));
        differences.push(Difference {
            path: child_path,
            kind: DiffKind::Added,
            left: None,
            right: Some((*item).clone()),
        });
    }
}

/// Compares two same-kind primitive values under the active options.
fn primitives_equal(left: &Value, right: &Value, options: &DiffOptions) -> bool {
    if options.ignore_string_case {
        if let (Value::String(a), Value::String(b)) = (left, right) {
            return a.to_lowercase() == b.to_lowercase();
        }
    }

    left.semantic_equals(right)
}
