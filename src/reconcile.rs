//! Set reconciliation for delimited text lists.
//!
//! This module splits two raw text blocks into tokens, runs each token
//! through a configurable normalization pipeline, and computes the set
//! relationship between the two sides: tokens only on the left, tokens only
//! on the right, the intersection, and the union. All sequences keep
//! first-seen order. The whole computation is a total function over
//! arbitrary input text.
//!
//! # Examples
//!
//! ```
//! use jdiff::{reconcile, ReconcileConfig};
//!
//! let config = ReconcileConfig {
//!     case_insensitive: true,
//!     ..Default::default()
//! };
//! let result = reconcile("A\nb\na", "a\nB\nc", &config);
//!
//! assert_eq!(result.intersection, vec!["a", "b"]);
//! assert_eq!(result.right_only, vec!["c"]);
//! assert!(result.left_only.is_empty());
//! ```

use serde::Serialize;
use std::collections::HashSet;

/// Configuration for list reconciliation.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Literal string that separates items in the input text
    pub separator: String,
    /// Lowercase tokens before comparison
    pub case_insensitive: bool,
    /// Trim leading/trailing whitespace from each token
    pub trim_whitespace: bool,
    /// Strip leading `0` characters from each token. A token that is all
    /// zeros becomes `"0"`, never the empty string.
    pub strip_leading_zeros: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            case_insensitive: false,
            trim_whitespace: true,
            strip_leading_zeros: false,
        }
    }
}

/// The result of reconciling two lists.
///
/// The four sequences contain distinct normalized tokens in first-seen
/// order. Every token of the left set appears in exactly one of `left_only`
/// and `intersection`; symmetrically for the right set. `left_count` and
/// `right_count` are raw non-empty item counts before deduplication, so they
/// reflect input volume rather than set size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
    pub intersection: Vec<String>,
    pub union: Vec<String>,
    pub left_count: usize,
    pub right_count: usize,
}

impl Reconciliation {
    /// True iff both sides normalize to the same set.
    pub fn identical(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty()
    }

    /// Jaccard-style similarity percentage: `|intersection| / |union| * 100`,
    /// defined as 0 when the union is empty.
    pub fn similarity(&self) -> f64 {
        if self.union.is_empty() {
            0.0
        } else {
            self.intersection.len() as f64 / self.union.len() as f64 * 100.0
        }
    }
}

/// Reconciles two delimited text lists as sets.
///
/// Each input is split by the literal separator; items that are blank after
/// trimming are discarded regardless of configuration. Surviving items are
/// normalized in fixed order (trim, strip leading zeros, lowercase, each
/// gated by its flag), deduplicated in first-seen order, and compared.
///
/// # Arguments
///
/// * `left_text` - Raw text of the first list
/// * `right_text` - Raw text of the second list
/// * `config` - Normalization and separator settings
///
/// # Examples
///
/// ```
/// use jdiff::{reconcile, ReconcileConfig};
///
/// let config = ReconcileConfig {
///     strip_leading_zeros: true,
///     ..Default::default()
/// };
/// let result = reconcile("007\n08", "7\n8", &config);
/// assert!(result.identical());
/// ```
pub fn reconcile(left_text: &str, right_text: &str, config: &ReconcileConfig) -> Reconciliation {
    let left_raw = split_items(left_text, &config.separator);
    let right_raw = split_items(right_text, &config.separator);

    let left_count = left_raw.len();
    let right_count = right_raw.len();

    let left_set = dedup_first_seen(left_raw.iter().map(|item| normalize_token(item, config)));
    let right_set = dedup_first_seen(right_raw.iter().map(|item| normalize_token(item, config)));

    let left_lookup: HashSet<&str> = left_set.iter().map(String::as_str).collect();
    let right_lookup: HashSet<&str> = right_set.iter().map(String::as_str).collect();

    let left_only: Vec<String> = left_set
        .iter()
        .filter(|token| !right_lookup.contains(token.as_str()))
        .cloned()
        .collect();
    let right_only: Vec<String> = right_set
        .iter()
        .filter(|token| !left_lookup.contains(token.as_str()))
        .cloned()
        .collect();
    let intersection: Vec<String> = left_set
        .iter()
        .filter(|token| right_lookup.contains(token.as_str()))
        .cloned()
        .collect();

    // union is the left set followed by the right set's unseen tokens,
    // which is exactly right_only
    let mut union = Vec::with_capacity(left_set.len() + right_only.len());
    union.extend(left_set.iter().cloned());
    union.extend(right_only.iter().cloned());

    Reconciliation {
        left_only,
        right_only,
        intersection,
        union,
        left_count,
        right_count,
    }
}

/// Splits raw text by the literal separator, discarding items that are blank
/// after trimming. The blank filter is unconditional and independent of the
/// trim flag.
fn split_items<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    text.split(separator)
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// Runs one raw item through the normalization pipeline.
///
/// Order is fixed: trim, then strip leading zeros, then lowercase. Stripping
/// a token of nothing but zeros yields `"0"`.
fn normalize_token(raw: &str, config: &ReconcileConfig) -> String {
    let mut token = raw;

    if config.trim_whitespace {
        token = token.trim();
    }

    if config.strip_leading_zeros {
        let stripped = token.trim_start_matches('0');
        token = if stripped.is_empty() && !token.is_empty() {
            "0"
        } else {
            stripped
        };
    }

    if config.case_insensitive {
        token.to_lowercase()
    } else {
        token.to_string()
    }
}

fn dedup_first_seen(tokens: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for token in tokens {
        if seen.insert(token.clone()) {
            out.push(token);
        }
    }
    out
}
