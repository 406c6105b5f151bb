// src/cli/handlers.rs
//! Command handlers: read points, build edges, run the engine, print the report.

use super::args::{CloseArgs, ConnectArgs};
use crate::cluster::{ClusterEngine, ClusterReport, Outcome};
use crate::config::Config;
use crate::error::ClusterError;
use crate::events::EventKind;
use crate::graph;
use crate::parse;
use crate::report::{self, RunStats};
use crate::types::{Edge, Point};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

/// Runs `close`: cluster down to `args.target` components and report the closing edge.
///
/// # Errors
/// Returns error if input cannot be read, the target is invalid, or the target is unreachable.
pub fn handle_close(args: &CloseArgs, config: &Config) -> Result<()> {
    let start = Instant::now();
    let (points, edges) = load_graph(&args.input, config)?;

    let logger = config.event_logger();
    let mut engine = ClusterEngine::new(&points);
    if let Some(logger) = &logger {
        engine = engine.with_logger(logger);
    }
    let cluster_report = engine.run(&edges, args.target)?;

    let stats = run_stats(&points, &edges, start);
    println!("{}", report::format_close(&cluster_report, &stats, args.format));

    if config.verbose {
        log_step(&format!(
            "Processed {} edges, {} unions",
            cluster_report.edges_processed, cluster_report.unions
        ));
        log_step(&describe_outcome(&cluster_report));
    }

    cluster_report.require_target()?;
    Ok(())
}

/// Runs `connect`: spend `args.pairs` edges and multiply the largest component sizes.
///
/// # Errors
/// Returns error if input cannot be read or parsed, or the product of the largest sizes overflows.
pub fn handle_connect(args: &ConnectArgs, config: &Config) -> Result<()> {
    let start = Instant::now();
    let (points, edges) = load_graph(&args.input, config)?;

    let logger = config.event_logger();
    let mut engine = ClusterEngine::new(&points);
    if let Some(logger) = &logger {
        engine = engine.with_logger(logger);
    }
    let budget_report = engine.connect_closest(&edges, args.pairs)?;

    let stats = run_stats(&points, &edges, start);
    println!(
        "{}",
        report::format_connect(&budget_report, args.largest, &stats, args.format)
    );

    let product = budget_report.largest_product(args.largest);
    if config.verbose {
        log_step(&format!(
            "Considered {} edges, {} unions, {} components left; product of {} largest: {}",
            budget_report.edges_considered,
            budget_report.unions,
            budget_report.components,
            args.largest,
            product.map_or_else(|| "overflow".to_string(), |p| p.to_string())
        ));
    }

    if product.is_none() {
        return Err(ClusterError::ProductOverflow { largest: args.largest }.into());
    }
    Ok(())
}

/// One-line summary of how a `close` run ended, for verbose output.
#[must_use]
pub fn describe_outcome(report: &ClusterReport) -> String {
    match &report.outcome {
        Outcome::NoEdgeNeeded => format!("No edge needed: already at {} components", report.components),
        Outcome::ReachedTarget { closing } => format!(
            "Reached {} components at edge ({}, {}) weight {}",
            report.components,
            closing.edge.u,
            closing.edge.v,
            closing.weight()
        ),
        Outcome::Exhausted { remaining } => {
            format!("Edges exhausted with {remaining} components left")
        }
    }
}

fn load_graph(input: &Path, config: &Config) -> Result<(Vec<Point>, Vec<Edge>)> {
    let points = parse::read_points(input)?;
    if config.verbose {
        log_step(&format!("Read {} points from {}", points.len(), input.display()));
    }

    let edges = graph::build_edges_with(&points, config.build_options())?;
    if config.verbose {
        log_step(&format!(
            "Built {} edges ({})",
            edges.len(),
            if config.engine.parallel { "parallel" } else { "sequential" }
        ));
    }
    if let Some(logger) = config.event_logger() {
        logger.log(EventKind::EdgesBuilt {
            points: points.len(),
            edges: edges.len(),
        });
    }

    Ok((points, edges))
}

fn run_stats(points: &[Point], edges: &[Edge], start: Instant) -> RunStats {
    RunStats {
        points: points.len(),
        edges: edges.len(),
        duration_ms: start.elapsed().as_millis(),
    }
}

fn log_step(msg: &str) {
    eprintln!("{} {}", "›".cyan(), msg.dimmed());
}
