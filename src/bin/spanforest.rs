// src/bin/spanforest.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use spanforest_core::cli::{self, Cli, CloseArgs, Commands, ConnectArgs};
use spanforest_core::config::Config;
use spanforest_core::exit::SpanforestExit;

fn main() {
    let result = run();
    if let Err(e) = &result {
        eprintln!("{} {e}", "error:".red().bold());
    }
    SpanforestExit::from(&result).exit();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    dispatch(&cli.command, &config)
}

fn dispatch(cmd: &Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Close {
            input,
            target,
            format,
        } => cli::handle_close(
            &CloseArgs {
                input: input.clone(),
                target: target.unwrap_or(config.cluster.target),
                format: *format,
            },
            config,
        ),
        Commands::Connect {
            input,
            pairs,
            largest,
            format,
        } => cli::handle_connect(
            &ConnectArgs {
                input: input.clone(),
                pairs: pairs.unwrap_or(config.cluster.pair_budget),
                largest: largest.unwrap_or(config.cluster.largest),
                format: *format,
            },
            config,
        ),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.verbose = cli.verbose;
    config.events.enabled |= cli.events;
    Ok(config)
}
