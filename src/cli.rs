use clap::Parser;
use std::path::PathBuf;

/// Node Pruner - removes unused files from node_modules
#[derive(Parser, Debug)]
#[command(name = "node-pruner")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  $ node-pruner --path=node_modules/.pnpm")]
pub struct Cli {
    /// Relative or absolute path to your node_modules directory
    #[arg(long, value_name = "DIR")]
    pub path: PathBuf,

    /// How many files to remove at the same time [default: 100]
    #[arg(
        long,
        env = "NODE_PRUNER_CONCURRENCY",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub concurrency: Option<u32>,

    /// Show what would be removed without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors (no progress or summary lines)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level for the crate's own events.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
