//! `glaisher`: explore integer partitions and Glaisher's bijection.
//!
//! **Usage:**
//! ```text
//! glaisher [--format text|json] [--max-n <N>] <COMMAND>
//!
//!   list <n> [--filter all|distinct|odd] [--order generator|display]
//!   map <parts> [--inverse]
//!   table <n>
//!   series <max>
//!   diagram <parts>
//! ```
//!
//! Parts are written as `10 + 2 + 1`, `10,2,1` or `(10, 2, 1)`.
//! Set `RUST_LOG=debug` for diagnostics on stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glaisher::series::{distinct_parts_series, odd_parts_series, partition_series, SERIES_MAX};
use glaisher::{
    decompose, display_order, distinct_partitions, odd_partitions, partitions, try_odd_to_unique,
    try_unique_to_odd, Correspondence, Partition, YoungDiagram,
};
use log::debug;
use serde_json::json;

/// Explore integer partitions and Glaisher's bijection.
#[derive(Parser)]
#[command(
    name = "glaisher",
    about = "Enumerate integer partitions and map distinct parts to odd parts"
)]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Largest n accepted by enumerating commands.
    #[arg(long, default_value_t = 40, global = true)]
    max_n: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Filter {
    All,
    Distinct,
    Odd,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Canonical recursive order, parts non-decreasing.
    Generator,
    /// Parts non-increasing, `(n)` first and all ones last.
    Display,
}

#[derive(Subcommand)]
enum Command {
    /// List the partitions of n.
    List {
        /// The integer to partition.
        n: u32,
        /// Restrict to a subset.
        #[arg(long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
        /// Ordering of the output.
        #[arg(long, value_enum, default_value_t = Order::Generator)]
        order: Order,
    },
    /// Apply Glaisher's bijection to one partition.
    Map {
        /// The partition, e.g. "10 + 2 + 1".
        parts: String,
        /// Map odd parts back to distinct parts.
        #[arg(long)]
        inverse: bool,
    },
    /// Print the distinct-to-odd correspondence table for n.
    Table {
        /// The integer to partition.
        n: u32,
    },
    /// Print generating-function coefficients up to q^max.
    Series {
        /// Highest power of q.
        max: u32,
    },
    /// Draw the Young diagram of a partition.
    Diagram {
        /// The partition, e.g. "5 + 5 + 1 + 1 + 1".
        parts: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    print!("{}", run(args.command, args.format, args.max_n)?);
    Ok(())
}

/// Executes one command and returns everything it prints.
///
/// # Errors
///
/// Fails on invalid input or when writing output fails.
fn run(command: Command, format: Format, max_n: u32) -> Result<String> {
    match command {
        Command::List { n, filter, order } => {
            check_n(u64::from(n), max_n)?;
            list(n, filter, order, format)
        }
        Command::Map { parts, inverse } => map(&parts, inverse, format, max_n),
        Command::Table { n } => {
            check_n(u64::from(n), max_n)?;
            table(n, format)
        }
        Command::Series { max } => series(max, format),
        Command::Diagram { parts } => diagram(&parts, format, max_n),
    }
}

/// Rejects `n` outside `1..=max_n`.
///
/// # Errors
///
/// Returns an error for `n = 0` or `n > max_n`.
fn check_n(n: u64, max_n: u32) -> Result<()> {
    if n == 0 {
        bail!("n must be at least 1");
    }
    if n > u64::from(max_n) {
        bail!("n = {n} exceeds --max-n {max_n}; raise --max-n to enumerate it");
    }
    Ok(())
}

/// Parses a partition and rejects totals beyond `max_n`.
///
/// # Errors
///
/// Fails when the text is not a partition or its total exceeds `max_n`.
fn parse_partition(text: &str, max_n: u32) -> Result<Partition> {
    let partition = text
        .parse::<Partition>()
        .with_context(|| format!("could not read partition from {text:?}"))?;
    check_n(partition.total(), max_n)?;
    Ok(partition)
}

fn pretty(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

/// # Errors
///
/// Fails only when writing output fails.
fn list(n: u32, filter: Filter, order: Order, format: Format) -> Result<String> {
    let items: Vec<Partition> = match order {
        Order::Generator => match filter {
            Filter::All => partitions(n).collect(),
            Filter::Distinct => distinct_partitions(n).collect(),
            Filter::Odd => odd_partitions(n).collect(),
        },
        Order::Display => display_order(n)
            .into_iter()
            .filter(|p| match filter {
                Filter::All => true,
                Filter::Distinct => p.is_distinct(),
                Filter::Odd => p.is_odd(),
            })
            .collect(),
    };
    debug!("listing {} partitions of {n}", items.len());

    match format {
        Format::Text => {
            let mut out = String::new();
            for p in &items {
                writeln!(out, "{p}")?;
            }
            writeln!(out)?;
            writeln!(out, "{} partition(s) of {n}", items.len())?;
            Ok(out)
        }
        Format::Json => pretty(&json!({ "n": n, "count": items.len(), "partitions": items })),
    }
}

/// # Errors
///
/// Fails when the partition cannot be parsed, its total exceeds `max_n`, or
/// it violates the direction's precondition (repeated parts forward, even
/// parts inverse, overflowing regrouped parts).
fn map(text: &str, inverse: bool, format: Format, max_n: u32) -> Result<String> {
    let input = parse_partition(text, max_n)?;
    let output = if inverse {
        try_odd_to_unique(&input)
    } else {
        try_unique_to_odd(&input)
    }
    .with_context(|| format!("cannot map {input}"))?;

    match format {
        Format::Text => {
            let mut out = String::new();
            if !inverse {
                for &part in &input {
                    writeln!(out, "{} = {}", part, decompose(part))?;
                }
            }
            writeln!(out, "{input}  ->  {output}")?;
            writeln!(out, "total {}", output.total())?;
            Ok(out)
        }
        Format::Json => pretty(&json!({
            "direction": if inverse { "odd_to_unique" } else { "unique_to_odd" },
            "input": input,
            "output": output,
            "total": output.total(),
        })),
    }
}

/// # Errors
///
/// Fails only when writing output fails.
fn table(n: u32, format: Format) -> Result<String> {
    let table = Correspondence::of(n);

    match format {
        Format::Text => {
            let mut out = String::new();
            for (k, distinct) in table.distinct().iter().enumerate() {
                let distinct = distinct.to_string();
                match table.target(k) {
                    Some(i) => {
                        writeln!(out, "[{k:>3}] {distinct:<30} -> [{i:>3}] {}", table.odd()[i])?;
                    }
                    None => writeln!(out, "[{k:>3}] {distinct:<30} -> (no image)")?,
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "{} distinct, {} odd, bijection: {}",
                table.len(),
                table.odd().len(),
                if table.is_bijection() { "yes" } else { "NO" }
            )?;
            Ok(out)
        }
        Format::Json => pretty(&serde_json::to_value(&table)?),
    }
}

/// # Errors
///
/// Fails when `max` is beyond [`SERIES_MAX`] or writing output fails.
fn series(max: u32, format: Format) -> Result<String> {
    let max = max as usize;
    if max > SERIES_MAX {
        bail!("series up to q^{max} overflows; the limit is q^{SERIES_MAX}");
    }
    let all = partition_series(max);
    let distinct = distinct_parts_series(max);
    let odd = odd_parts_series(max);

    match format {
        Format::Text => {
            let mut out = String::new();
            writeln!(out, "{:>4} {:>20} {:>20} {:>20}", "n", "p(n)", "distinct", "odd")?;
            for n in 0..=max {
                writeln!(out, "{:>4} {:>20} {:>20} {:>20}", n, all[n], distinct[n], odd[n])?;
            }
            Ok(out)
        }
        Format::Json => pretty(&json!({ "partitions": all, "distinct": distinct, "odd": odd })),
    }
}

/// # Errors
///
/// Fails when the partition cannot be parsed or its total exceeds `max_n`.
fn diagram(text: &str, format: Format, max_n: u32) -> Result<String> {
    let input = parse_partition(text, max_n)?;
    let yt = YoungDiagram::new(&input);

    match format {
        Format::Text => Ok(format!("{yt}\n")),
        Format::Json => {
            let rows: Vec<_> = (0..yt.rows().len())
                .filter_map(|r| yt.row_cells(r))
                .map(|cells| json!({ "start": cells.start, "end": cells.end }))
                .collect();
            pretty(&json!({ "rows": yt.rows(), "cells": yt.cell_count(), "row_cells": rows }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaisher::PartitionError;

    fn run_args(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        run(args.command, args.format, args.max_n)
    }

    fn partition_error(result: Result<String>) -> Option<PartitionError> {
        result.err()?.downcast_ref::<PartitionError>().cloned()
    }

    #[test]
    fn check_n_bounds() {
        assert!(check_n(0, 40).is_err());
        assert!(check_n(1, 40).is_ok());
        assert!(check_n(40, 40).is_ok());
        assert!(check_n(41, 40).is_err());
    }

    #[test]
    fn parse_partition_reports_input() {
        let message = parse_partition("3 + x", 40)
            .err()
            .map(|err| format!("{err:#}"))
            .unwrap_or_default();
        assert!(message.contains("\"3 + x\""), "{message}");
        assert!(message.contains("invalid part 'x'"), "{message}");
    }

    #[test]
    fn cli_parses_subcommands() {
        let args = Args::try_parse_from([
            "glaisher", "--format", "json", "list", "13", "--filter", "odd",
        ]);
        assert!(matches!(
            args.map(|a| (a.format, a.command)),
            Ok((Format::Json, Command::List { n: 13, filter: Filter::Odd, order: Order::Generator }))
        ));
    }

    #[test]
    fn map_forward_shows_decomposition() {
        let out = run_args(&["glaisher", "map", "10 + 2 + 1"]).unwrap_or_default();
        assert!(out.contains("10 = 2^1 · 5"), "{out}");
        assert!(out.contains("10 + 2 + 1  ->  5 + 5 + 1 + 1 + 1"), "{out}");
        assert!(out.contains("total 13"), "{out}");
    }

    #[test]
    fn map_rejects_repeated_parts() {
        assert_eq!(
            partition_error(run_args(&["glaisher", "map", "5 + 5 + 1 + 1 + 1"])),
            Some(PartitionError::RepeatedPart { part: 5 })
        );
    }

    #[test]
    fn map_inverse_rejects_even_parts() {
        assert_eq!(
            partition_error(run_args(&["glaisher", "map", "--inverse", "3 + 4 + 1"])),
            Some(PartitionError::EvenPart { part: 4 })
        );
    }

    #[test]
    fn map_inverse_json() {
        let out = run_args(&["glaisher", "--format", "json", "map", "--inverse", "5 5 1 1 1"])
            .unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["output"], json!([10, 2, 1]));
        assert_eq!(value["total"], json!(13));
    }

    #[test]
    fn map_and_diagram_respect_max_n() {
        // Totals past --max-n are refused before any mapping or drawing.
        for argv in [
            &["glaisher", "map", "2147483648"][..],
            &["glaisher", "map", "--inverse", "2147483649 2147483649"][..],
            &["glaisher", "diagram", "4000000000"][..],
            &["glaisher", "--max-n", "12", "diagram", "10 + 2 + 1"][..],
        ] {
            let message = run_args(argv)
                .err()
                .map(|err| format!("{err:#}"))
                .unwrap_or_default();
            assert!(message.contains("exceeds --max-n"), "{argv:?}: {message}");
        }
        assert!(run_args(&["glaisher", "--max-n", "13", "diagram", "10 + 2 + 1"]).is_ok());
    }

    #[test]
    fn list_display_order_filters_odd() {
        let out = run_args(&["glaisher", "list", "5", "--order", "display", "--filter", "odd"])
            .unwrap_or_default();
        assert_eq!(out, "5\n3 + 1 + 1\n1 + 1 + 1 + 1 + 1\n\n3 partition(s) of 5\n");
    }

    #[test]
    fn list_json_counts() {
        let out = run_args(&["glaisher", "--format", "json", "list", "13", "--filter", "distinct"])
            .unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["count"], json!(18));
    }

    #[test]
    fn list_and_table_reject_zero_and_large_n() {
        assert!(run_args(&["glaisher", "list", "0"]).is_err());
        assert!(run_args(&["glaisher", "table", "41"]).is_err());
    }

    #[test]
    fn table_reports_bijection() {
        let out = run_args(&["glaisher", "table", "13"]).unwrap_or_default();
        assert!(out.ends_with("18 distinct, 18 odd, bijection: yes\n"), "{out}");
    }

    #[test]
    fn series_limit() {
        assert!(run_args(&["glaisher", "series", "401"]).is_err());
        let out = run_args(&["glaisher", "--format", "json", "series", "10"]).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["partitions"][10], json!(42));
    }

    #[test]
    fn diagram_text() {
        let out = run_args(&["glaisher", "diagram", "1 + 3"]).unwrap_or_default();
        assert_eq!(out, "###\n#\n");
    }
}
