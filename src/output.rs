//! Output formatting for diff and reconciliation results.
//!
//! This module renders results in various output formats (terminal with
//! colors, JSON, plain text). It provides control over how values are
//! displayed and truncated.
//!
//! # Examples
//!
//! ```
//! use jdiff::{compute_diff, format_diff, DiffOptions, OutputFormat, OutputOptions, Value};
//!
//! let summary = compute_diff(
//!     &Value::Number(42.0),
//!     &Value::Number(43.0),
//!     &DiffOptions::default(),
//! );
//!
//! let output = format_diff(&summary, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert!(output.contains("42"));
//! assert!(output.contains("43"));
//! ```

use crate::diff::{DiffKind, DiffStats, DiffSummary, Difference, PathSegment};
use crate::error::OutputError;
use crate::reconcile::Reconciliation;
use crate::value::Value;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the result
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Show full canonical values instead of previews
    pub show_values: bool,
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            show_values: false,
            max_value_length: 80,
        }
    }
}

/// Formats a diff summary according to the specified format and options.
///
/// # Arguments
///
/// * `summary` - The diff summary to format
/// * `format` - The output format (Terminal, JSON, or Plain)
/// * `options` - Formatting options
///
/// # Examples
///
/// ```
/// use jdiff::{compute_diff, format_diff, DiffOptions, OutputFormat, OutputOptions, Value};
///
/// let summary = compute_diff(&Value::Null, &Value::Null, &DiffOptions::default());
/// let output = format_diff(&summary, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
/// assert!(output.contains("No differences"));
/// ```
pub fn format_diff(
    summary: &DiffSummary,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_diff_terminal(summary, options)),
        OutputFormat::Json => format_diff_json(summary),
        OutputFormat::Plain => Ok(format_diff_plain(summary, options)),
    }
}

/// Formats a reconciliation result according to the specified format.
///
/// # Examples
///
/// ```
/// use jdiff::{format_reconciliation, reconcile, OutputFormat, OutputOptions, ReconcileConfig};
///
/// let result = reconcile("a\nb", "b\nc", &ReconcileConfig::default());
/// let output =
///     format_reconciliation(&result, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
/// assert!(output.contains("Only in left (1)"));
/// ```
pub fn format_reconciliation(
    result: &Reconciliation,
    format: &OutputFormat,
    _options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_reconciliation_sections(result, true)),
        OutputFormat::Json => format_reconciliation_json(result),
        OutputFormat::Plain => Ok(format_reconciliation_sections(result, false)),
    }
}

/// Formats a diff for terminal output with colors.
///
/// Color scheme:
/// - Added: green
/// - Removed: red
/// - Modified: yellow
/// - Type mismatch: magenta
fn format_diff_terminal(summary: &DiffSummary, options: &OutputOptions) -> String {
    if summary.differences.is_empty() {
        return "No differences detected.".dimmed().to_string();
    }

    let mut output = String::new();
    for difference in &summary.differences {
        output.push_str(&format_difference_terminal(difference, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_diff_stats(&summary.stats));
    output
}

/// Formats a single difference for terminal output.
fn format_difference_terminal(difference: &Difference, options: &OutputOptions) -> String {
    let path = format_path(&difference.path);

    match &difference.kind {
        DiffKind::Added => {
            let value = render_value(difference.right.as_ref(), options);
            format!("{} {}: {}", "+".bright_green(), path.green(), value.green())
        }
        DiffKind::Removed => {
            let value = render_value(difference.left.as_ref(), options);
            format!("{} {}: {}", "-".bright_red(), path.red(), value.red())
        }
        DiffKind::Modified => {
            let left = render_value(difference.left.as_ref(), options);
            let right = render_value(difference.right.as_ref(), options);
            format!(
                "{} {}: {} {} {}",
                "•".bright_yellow(),
                path.yellow(),
                left.yellow(),
                "→".bright_yellow(),
                right.yellow()
            )
        }
        DiffKind::TypeMismatch { left, right } => {
            let left_value = render_value(difference.left.as_ref(), options);
            let right_value = render_value(difference.right.as_ref(), options);
            format!(
                "{} {}: {} ({}) {} {} ({})",
                "!".bright_magenta(),
                path.magenta(),
                left_value.magenta(),
                left.name().magenta(),
                "→".bright_magenta(),
                right_value.magenta(),
                right.name().magenta()
            )
        }
    }
}

/// Formats a diff for plain text output (no colors).
fn format_diff_plain(summary: &DiffSummary, options: &OutputOptions) -> String {
    if summary.differences.is_empty() {
        return "No differences detected.".to_string();
    }

    let mut output = String::new();
    for difference in &summary.differences {
        output.push_str(&format_difference_plain(difference, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_diff_stats(&summary.stats));
    output
}

/// Formats a single difference for plain text output.
fn format_difference_plain(difference: &Difference, options: &OutputOptions) -> String {
    let path = format_path(&difference.path);

    match &difference.kind {
        DiffKind::Added => {
            let value = render_value(difference.right.as_ref(), options);
            format!("+ {}: {}", path, value)
        }
        DiffKind::Removed => {
            let value = render_value(difference.left.as_ref(), options);
            format!("- {}: {}", path, value)
        }
        DiffKind::Modified => {
            let left = render_value(difference.left.as_ref(), options);
            let right = render_value(difference.right.as_ref(), options);
            format!("• {}: {} → {}", path, left, right)
        }
        DiffKind::TypeMismatch { left, right } => {
            let left_value = render_value(difference.left.as_ref(), options);
            let right_value = render_value(difference.right.as_ref(), options);
            format!(
                "! {}: {} ({}) → {} ({})",
                path,
                left_value,
                left.name(),
                right_value,
                right.name()
            )
        }
    }
}

/// Formats a diff as JSON.
///
/// The JSON structure includes the records, the identical flag, the total,
/// and the per-kind counts.
fn format_diff_json(summary: &DiffSummary) -> Result<String, OutputError> {
    use serde_json::json;

    let differences: Vec<serde_json::Value> = summary
        .differences
        .iter()
        .map(|difference| {
            let mut record = json!({
                "path": path_to_json(&difference.path),
                "kind": kind_label(&difference.kind),
                "left": difference.left.as_ref().map(value_to_json),
                "right": difference.right.as_ref().map(value_to_json),
            });
            if let DiffKind::TypeMismatch { left, right } = &difference.kind {
                record["left_type"] = json!(left.name());
                record["right_type"] = json!(right.name());
            }
            record
        })
        .collect();

    let output = json!({
        "differences": differences,
        "identical": summary.identical,
        "total": summary.total,
        "stats": {
            "type_mismatches": summary.stats.type_mismatches,
            "added": summary.stats.added,
            "removed": summary.stats.removed,
            "modified": summary.stats.modified,
        }
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

/// Renders the four result sets as sections, then a summary line.
fn format_reconciliation_sections(result: &Reconciliation, colored: bool) -> String {
    let mut output = String::new();

    let sections: [(&str, &[String], fn(&str) -> ColoredString); 3] = [
        ("Only in left", result.left_only.as_slice(), |s: &str| s.red()),
        ("Only in right", result.right_only.as_slice(), |s: &str| {
            s.yellow()
        }),
        ("In both", result.intersection.as_slice(), |s: &str| s.green()),
    ];

    for (title, items, paint) in sections {
        let heading = format!("{} ({}):", title, items.len());
        if colored {
            output.push_str(&paint(&heading).bold().to_string());
        } else {
            output.push_str(&heading);
        }
        output.push('\n');
        if items.is_empty() {
            output.push_str("  (none)\n");
        } else {
            for item in items.iter() {
                output.push_str("  ");
                if colored {
                    output.push_str(&paint(item).to_string());
                } else {
                    output.push_str(item);
                }
                output.push('\n');
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Summary: {} left items, {} right items, {} distinct, {:.1}% similar",
        result.left_count,
        result.right_count,
        result.union.len(),
        result.similarity()
    ));
    output
}

/// Formats a reconciliation as JSON, with the similarity attached.
fn format_reconciliation_json(result: &Reconciliation) -> Result<String, OutputError> {
    let mut output = serde_json::to_value(result)
        .map_err(|e| OutputError::JsonSerializationError { source: e })?;
    output["similarity"] = serde_json::json!(result.similarity());

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

/// Converts a path to a readable string.
///
/// Joins object keys with dots and renders array indices in bracket
/// notation.
///
/// # Examples
///
/// - `[user, name]` → `"user.name"`
/// - `[items, 0, id]` → `"items[0].id"`
/// - `[]` → `"(root)"`
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "(root)".to_string();
    }

    let mut result = String::new();
    for (i, segment) in path.iter().enumerate() {
        match segment {
            PathSegment::Key(key) => {
                if i > 0 {
                    result.push('.');
                }
                result.push_str(key);
            }
            PathSegment::Index(index) => {
                result.push_str(&format!("[{}]", index));
            }
        }
    }
    result
}

/// Formats a value for display, honoring the preview/full-value option.
fn render_value(value: Option<&Value>, options: &OutputOptions) -> String {
    let Some(value) = value else {
        return String::new();
    };

    if options.show_values {
        let full = value.canonical_string();
        if full.len() > options.max_value_length {
            format!(
                "{}...",
                &full[..options.max_value_length.saturating_sub(3)]
            )
        } else {
            full
        }
    } else {
        value.preview(options.max_value_length)
    }
}

fn kind_label(kind: &DiffKind) -> &'static str {
    match kind {
        DiffKind::TypeMismatch { .. } => "type_mismatch",
        DiffKind::Added => "added",
        DiffKind::Removed => "removed",
        DiffKind::Modified => "modified",
    }
}

/// Formats the per-kind counts as a one-line summary.
fn format_diff_stats(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No differences".to_string();
    }

    let mut parts = Vec::new();
    if stats.added > 0 {
        parts.push(format!("{} added", stats.added));
    }
    if stats.removed > 0 {
        parts.push(format!("{} removed", stats.removed));
    }
    if stats.modified > 0 {
        parts.push(format!("{} modified", stats.modified));
    }
    if stats.type_mismatches > 0 {
        let label = if stats.type_mismatches == 1 {
            "type mismatch"
        } else {
            "type mismatches"
        };
        parts.push(format!("{} {}", stats.type_mismatches, label));
    }

    format!("Summary: {}", parts.join(", "))
}

fn path_to_json(path: &[PathSegment]) -> serde_json::Value {
    let segments: Vec<serde_json::Value> = path
        .iter()
        .map(|segment| match segment {
            PathSegment::Key(key) => serde_json::json!(key),
            PathSegment::Index(index) => serde_json::json!(index),
        })
        .collect();
    serde_json::Value::Array(segments)
}

/// Converts a [`Value`] to a `serde_json::Value` for JSON serialization.
fn value_to_json(value: &Value) -> serde_json::Value {
    use serde_json::json;

    match value {
        Value::Null => json!(null),
        Value::Bool(b) => json!(b),
        Value::Number(n) => json!(n),
        Value::String(s) => json!(s),
        Value::Array(arr) => {
            let items: Vec<serde_json::Value> = arr.iter().map(value_to_json).collect();
            json!(items)
        }
        Value::Object(entries) => {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect();
            json!(map)
        }
    }
}
