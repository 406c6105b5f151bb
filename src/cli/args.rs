use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spanforest", version, about = "Minimum-spanning-forest clustering of 3D points")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (defaults to ./spanforest.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print progress to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Append clustering events to the configured JSONL log
    #[arg(long, global = true)]
    pub events: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Connect points closest-first until TARGET components remain; report the closing edge
    Close {
        /// Point list, one "x,y,z" per line ("-" for stdin)
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,
        /// Component count to stop at [config: cluster.target, default 1]
        #[arg(long, short)]
        target: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
    /// Connect the K closest pairs and multiply the largest component sizes
    Connect {
        /// Point list, one "x,y,z" per line ("-" for stdin)
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,
        /// Closest pairs to consider, cycle edges included [config: cluster.pair_budget, default 1000]
        #[arg(long, short = 'k')]
        pairs: Option<usize>,
        /// How many of the largest component sizes to multiply [config: cluster.largest, default 3]
        #[arg(long, short)]
        largest: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
}

/// Arguments for the close command (used by handlers)
#[derive(Debug, Clone)]
pub struct CloseArgs {
    pub input: PathBuf,
    pub target: usize,
    pub format: OutputFormat,
}

/// Arguments for the connect command (used by handlers)
#[derive(Debug, Clone)]
pub struct ConnectArgs {
    pub input: PathBuf,
    pub pairs: usize,
    pub largest: usize,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_args_have_help() {
        let cmd = Cli::command();
        for name in ["close", "connect"] {
            let sub = cmd.find_subcommand(name).unwrap();
            for arg in sub.get_arguments().filter(|a| !a.is_global_set()) {
                assert!(arg.get_help().is_some(), "{name} --{} has no help", arg.get_id());
            }
        }
    }

    #[test]
    fn test_connect_flags_parse() {
        let cli = Cli::try_parse_from(["spanforest", "connect", "pts.txt", "-k", "10", "--largest", "2"]).unwrap();
        match cli.command {
            Commands::Connect { input, pairs, largest, .. } => {
                assert_eq!(input, PathBuf::from("pts.txt"));
                assert_eq!(pairs, Some(10));
                assert_eq!(largest, Some(2));
            }
            Commands::Close { .. } => panic!("expected connect"),
        }
    }
}
