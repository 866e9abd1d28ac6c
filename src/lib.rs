//! jdiff - structural diff for JSON documents and set reconciliation for
//! delimited lists.
//!
//! This library provides two independent, stateless comparison engines. The
//! structural differ deep-compares two parsed JSON values and reports typed,
//! path-addressed differences. The set reconciler normalizes two delimited
//! text lists and computes their set relationship. Both are pure functions
//! over immutable inputs and are safe to call concurrently.
//!
//! # Example
//!
//! ```no_run
//! use jdiff::{compute_diff, format_diff, parse_file, DiffOptions, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse two documents
//! let left = parse_file(Path::new("old.json"))?;
//! let right = parse_file(Path::new("new.json"))?;
//!
//! // Compute the structural diff
//! let summary = compute_diff(&left, &right, &DiffOptions::default());
//!
//! // Format the output
//! let output = format_diff(&summary, &OutputFormat::Terminal, &OutputOptions::default())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod filter;
pub mod output;
pub mod parser;
pub mod reconcile;
pub mod value;

// Re-export commonly used types for convenience
pub use diff::{
    compute_diff, DiffKind, DiffOptions, DiffStats, DiffSummary, Difference, PathSegment,
};
pub use error::{JdiffError, OutputError, ParseError};
pub use filter::{filter_diff, FilterConfig, PathPattern};
pub use output::{format_diff, format_reconciliation, OutputFormat, OutputOptions};
pub use parser::{parse_file, parse_str};
pub use reconcile::{reconcile, ReconcileConfig, Reconciliation};
pub use value::{Value, ValueKind};
