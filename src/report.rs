// src/report.rs
//! Output formatting for clustering results.
//!
//! Terminal output is for people; JSON output carries the full report for scripts.

use crate::cluster::{BudgetReport, ClusterReport, Outcome};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Input-side numbers shared by both report kinds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunStats {
    pub points: usize,
    pub edges: usize,
    pub duration_ms: u128,
}

#[must_use]
pub fn format_close(report: &ClusterReport, stats: &RunStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => close_json(report, stats),
        OutputFormat::Terminal => close_terminal(report, stats),
    }
}

#[must_use]
pub fn format_connect(
    report: &BudgetReport,
    largest: usize,
    stats: &RunStats,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => connect_json(report, largest, stats),
        OutputFormat::Terminal => connect_terminal(report, largest, stats),
    }
}

#[derive(Serialize)]
struct CloseJson<'a> {
    answer: Option<i128>,
    stats: &'a RunStats,
    report: &'a ClusterReport,
}

#[derive(Serialize)]
struct ConnectJson<'a> {
    answer: Option<u128>,
    largest: usize,
    stats: &'a RunStats,
    report: &'a BudgetReport,
}

fn close_json(report: &ClusterReport, stats: &RunStats) -> String {
    let out = CloseJson {
        answer: report.closing_product(),
        stats,
        report,
    };
    serde_json::to_string_pretty(&out).unwrap_or_default()
}

fn connect_json(report: &BudgetReport, largest: usize, stats: &RunStats) -> String {
    let out = ConnectJson {
        answer: report.largest_product(largest),
        largest,
        stats,
        report,
    };
    serde_json::to_string_pretty(&out).unwrap_or_default()
}

fn close_terminal(report: &ClusterReport, stats: &RunStats) -> String {
    let mut out = String::new();
    write_header(&mut out, "CLOSE");
    write_stats(&mut out, stats);

    writeln!(out, "   Target components: {}", report.target.to_string().white()).ok();
    writeln!(out, "   Edges processed:   {}", report.edges_processed.to_string().white()).ok();
    writeln!(out, "   Unions:            {}", report.unions.to_string().white()).ok();
    writeln!(out).ok();

    match &report.outcome {
        Outcome::ReachedTarget { closing } => {
            writeln!(
                out,
                "   Closing edge: #{} {} ↔ #{} {} (weight {})",
                closing.edge.u,
                closing.from,
                closing.edge.v,
                closing.to,
                closing.weight()
            )
            .ok();
            writeln!(
                out,
                "{} {}",
                "✓ Answer:".green().bold(),
                closing.x_product().to_string().bold()
            )
            .ok();
        }
        Outcome::NoEdgeNeeded => {
            writeln!(
                out,
                "{}",
                "✓ Already at target: no edge needed.".green()
            )
            .ok();
        }
        Outcome::Exhausted { remaining } => {
            writeln!(
                out,
                "{}",
                format!("✗ Edges exhausted with {remaining} components left.")
                    .red()
                    .bold()
            )
            .ok();
        }
    }

    out
}

fn connect_terminal(report: &BudgetReport, largest: usize, stats: &RunStats) -> String {
    let mut out = String::new();
    write_header(&mut out, "CONNECT");
    write_stats(&mut out, stats);

    writeln!(out, "   Pair budget:       {}", report.budget.to_string().white()).ok();
    writeln!(out, "   Edges considered:  {}", report.edges_considered.to_string().white()).ok();
    writeln!(out, "   Unions:            {}", report.unions.to_string().white()).ok();
    writeln!(out, "   Components:        {}", report.components.to_string().white()).ok();

    let top: Vec<String> = report
        .component_sizes
        .iter()
        .take(largest)
        .map(ToString::to_string)
        .collect();
    writeln!(out, "   Largest {largest}:         [{}]", top.join(", ")).ok();
    writeln!(out).ok();
    match report.largest_product(largest) {
        Some(answer) => {
            writeln!(out, "{} {}", "✓ Answer:".green().bold(), answer.to_string().bold()).ok();
        }
        None => {
            writeln!(
                out,
                "{}",
                format!("✗ Product of the {largest} largest sizes overflows u128.")
                    .red()
                    .bold()
            )
            .ok();
        }
    }

    out
}

fn write_header(out: &mut String, title: &str) {
    writeln!(out, "{}", "─".repeat(50).dimmed()).ok();
    writeln!(out, "{}", format!(" SPANFOREST {title} ").cyan().bold()).ok();
    writeln!(out, "{}", "─".repeat(50).dimmed()).ok();
}

fn write_stats(out: &mut String, stats: &RunStats) {
    writeln!(out, "   Points:            {}", stats.points.to_string().white()).ok();
    writeln!(out, "   Edges built:       {}", stats.edges.to_string().white()).ok();
    writeln!(out, "   Time:              {}ms", stats.duration_ms.to_string().white()).ok();
}
