// tests/cli_handlers.rs - Handler results and exit codes
use std::fs;
use std::path::PathBuf;

use spanforest_core::cli::handlers::describe_outcome;
use spanforest_core::cli::{handle_close, handle_connect, CloseArgs, ConnectArgs};
use spanforest_core::{cluster, graph, parse};
use spanforest_core::config::Config;
use spanforest_core::events::{read_events, EventKind};
use spanforest_core::exit::SpanforestExit;
use spanforest_core::report::OutputFormat;
use tempfile::TempDir;

fn input(content: &str) -> (TempDir, PathBuf) {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("points.txt");
    fs::write(&path, content).unwrap();
    (d, path)
}

fn close(input: PathBuf, target: usize) -> CloseArgs {
    CloseArgs { input, target, format: OutputFormat::Json }
}

#[test]
fn test_close_succeeds() {
    let (_d, path) = input("0,0,0\n0,0,3\n4,0,0\n");
    let res = handle_close(&close(path, 1), &Config::new());
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::Success);
}

#[test]
fn test_close_invalid_target_is_invalid_input() {
    let (_d, path) = input("0,0,0\n0,0,3\n");
    let res = handle_close(&close(path, 3), &Config::new());
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::InvalidInput);
}

#[test]
fn test_parse_error_is_invalid_input() {
    let (_d, path) = input("0,0,0\nnot a point\n");
    let res = handle_close(&close(path, 1), &Config::new());
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::InvalidInput);
}

#[test]
fn test_missing_input_is_error() {
    let res = handle_close(&close(PathBuf::from("missing/points.txt"), 1), &Config::new());
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::Error);
}

#[test]
fn test_connect_writes_events_when_enabled() {
    let (d, path) = input("0,0,0\n1,0,0\n9,9,9\n");
    let mut config = Config::new();
    config.engine.parallel = false;
    config.events.enabled = true;
    config.events.path = d.path().join("events.jsonl");

    let args = ConnectArgs { input: path, pairs: 1, largest: 3, format: OutputFormat::Terminal };
    handle_connect(&args, &config).unwrap();

    let kinds: Vec<_> = read_events(&config.events.path).unwrap().into_iter().map(|e| e.kind).collect();
    assert_eq!(kinds.first(), Some(&EventKind::EdgesBuilt { points: 3, edges: 3 }));
    assert_eq!(
        kinds.last(),
        Some(&EventKind::BudgetSpent { edges_considered: 1, unions: 1, components: 2 })
    );
}

#[test]
fn test_connect_product_overflow_is_error() {
    // 100 far-apart triples: 300 edges join each triple, leaving 100 components of size 3.
    let text: String = (0..100)
        .map(|i| {
            let x = i * 1000;
            format!("{x},0,0\n{},0,0\n{},0,0\n", x + 1, x + 2)
        })
        .collect();
    let (_d, path) = input(&text);
    let mut config = Config::new();
    config.engine.parallel = false;

    let args = ConnectArgs { input: path.clone(), pairs: 300, largest: 100, format: OutputFormat::Json };
    let res = handle_connect(&args, &config);
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::Error);

    let args = ConnectArgs { input: path, pairs: 300, largest: 80, format: OutputFormat::Json };
    assert!(handle_connect(&args, &config).is_ok());
}

#[test]
fn test_verbose_close_succeeds() {
    let (_d, path) = input("0,0,0\n0,0,3\n4,0,0\n");
    let mut config = Config::new();
    config.verbose = true;
    let res = handle_close(&close(path, 1), &config);
    assert_eq!(SpanforestExit::from(&res), SpanforestExit::Success);
}

#[test]
fn test_describe_outcome() {
    let points = parse::parse_points("0,0,0\n0,0,3\n4,0,0\n").unwrap();
    let edges = graph::build_edges(&points).unwrap();

    let reached = cluster::run(&points, &edges, 1).unwrap();
    assert_eq!(describe_outcome(&reached), "Reached 1 components at edge (0, 2) weight 16");

    let none = cluster::run(&points, &edges, 3).unwrap();
    assert_eq!(describe_outcome(&none), "No edge needed: already at 3 components");

    let exhausted = cluster::run(&points, &edges[..1], 1).unwrap();
    assert_eq!(describe_outcome(&exhausted), "Edges exhausted with 2 components left");
}
