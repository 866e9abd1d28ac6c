//! jdiff command-line interface.
//!
//! This is the main entry point for the jdiff CLI tool. It uses clap for
//! argument parsing and wires together the library modules: the `json`
//! subcommand runs the structural differ over two documents, the `lists`
//! subcommand reconciles two delimited lists as sets.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use jdiff::{
    compute_diff, filter_diff, format_diff, format_reconciliation, parse_file, reconcile,
    DiffOptions, FilterConfig, OutputFormat, OutputOptions, ReconcileConfig,
};
use std::path::PathBuf;
use std::process;

/// jdiff - structural diff for JSON documents and delimited lists
///
/// Compares JSON documents structurally, showing typed differences by path,
/// or reconciles two delimited lists as sets.
#[derive(Parser)]
#[command(name = "jdiff")]
#[command(version)]
#[command(about = "Structural diff for JSON documents and delimited lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two JSON documents structurally
    Json(JsonArgs),
    /// Reconcile two delimited lists as sets
    Lists(ListsArgs),
}

#[derive(Args)]
struct JsonArgs {
    /// First document to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second document to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Compare arrays without regard to element order
    #[arg(long)]
    ignore_array_order: bool,

    /// Case-fold strings before comparing them
    #[arg(long)]
    ignore_case: bool,

    /// Path pattern to exclude from the result (repeatable)
    #[arg(long, value_name = "PATTERN")]
    ignore_path: Vec<String>,

    /// Path pattern to restrict the result to (repeatable)
    #[arg(long, value_name = "PATTERN")]
    only_path: Vec<String>,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct ListsArgs {
    /// First list file
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second list file
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Item separator; \n and \t escapes are accepted
    #[arg(long, default_value = "\\n", value_name = "SEP")]
    separator: String,

    /// Lowercase items before comparison
    #[arg(long)]
    case_insensitive: bool,

    /// Keep leading/trailing whitespace on items
    #[arg(long)]
    no_trim: bool,

    /// Strip leading zeros from items
    #[arg(long)]
    strip_leading_zeros: bool,

    #[command(flatten)]
    display: DisplayArgs,
}

/// Display flags shared by both subcommands.
#[derive(Args)]
struct DisplayArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Show full values instead of previews
    #[arg(long)]
    show_values: bool,

    /// Maximum length for displayed values
    #[arg(long, default_value = "80")]
    max_value_length: usize,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress the summary line)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Json(args) => run_json(args),
        Command::Lists(args) => run_lists(args),
    }
}

fn run_json(args: JsonArgs) -> Result<i32> {
    if args.display.verbose {
        eprintln!("Parsing {}...", args.file1.display());
    }
    let left = parse_file(&args.file1)
        .with_context(|| format!("Failed to parse first file: {}", args.file1.display()))?;

    if args.display.verbose {
        eprintln!("Parsing {}...", args.file2.display());
    }
    let right = parse_file(&args.file2)
        .with_context(|| format!("Failed to parse second file: {}", args.file2.display()))?;

    if args.display.verbose {
        eprintln!("Computing diff...");
    }
    let options = DiffOptions {
        ignore_array_order: args.ignore_array_order,
        ignore_string_case: args.ignore_case,
    };
    let mut summary = compute_diff(&left, &right, &options);

    let mut filter_config = FilterConfig::new();
    for pattern in &args.ignore_path {
        filter_config = filter_config.ignore(pattern);
    }
    for pattern in &args.only_path {
        filter_config = filter_config.only(pattern);
    }
    if filter_config.has_filters() {
        summary = filter_diff(&summary, &filter_config);
    }

    let output = format_diff(
        &summary,
        &args.display.format.into(),
        &output_options(&args.display),
    )
    .context("Failed to format diff output")?;

    print_result(&output, args.display.quiet);

    if summary.identical {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn run_lists(args: ListsArgs) -> Result<i32> {
    if args.display.verbose {
        eprintln!("Reading {}...", args.file1.display());
    }
    let left_text = std::fs::read_to_string(&args.file1)
        .with_context(|| format!("Failed to read first file: {}", args.file1.display()))?;

    if args.display.verbose {
        eprintln!("Reading {}...", args.file2.display());
    }
    let right_text = std::fs::read_to_string(&args.file2)
        .with_context(|| format!("Failed to read second file: {}", args.file2.display()))?;

    let config = ReconcileConfig {
        separator: unescape_separator(&args.separator),
        case_insensitive: args.case_insensitive,
        trim_whitespace: !args.no_trim,
        strip_leading_zeros: args.strip_leading_zeros,
    };
    let result = reconcile(&left_text, &right_text, &config);

    let output = format_reconciliation(
        &result,
        &args.display.format.into(),
        &output_options(&args.display),
    )
    .context("Failed to format reconciliation output")?;

    print_result(&output, args.display.quiet);

    if result.identical() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn output_options(display: &DisplayArgs) -> OutputOptions {
    OutputOptions {
        show_values: display.show_values,
        max_value_length: display.max_value_length,
    }
}

/// Prints the formatted result, dropping the summary line in quiet mode.
fn print_result(output: &str, quiet: bool) {
    if !quiet {
        println!("{}", output);
        return;
    }

    for line in output.lines() {
        if !line.starts_with("Summary:") && !line.trim().is_empty() {
            println!("{}", line);
        }
    }
}

/// Translates `\n` and `\t` escapes typed on the command line into the
/// literal separator characters.
fn unescape_separator(separator: &str) -> String {
    separator.replace("\\n", "\n").replace("\\t", "\t")
}
