//! Prune command implementation.

use crate::cli::Cli;
use crate::config::Config;
use crate::pruner::{validate_root, PruneOptions, PruneReport, Pruner};
use anyhow::{Context, Result};
use serde::Serialize;

/// JSON shape of a report. Paths are lossy UTF-8 so that any removed path
/// can be printed.
#[derive(Serialize)]
struct JsonReport {
    root: String,
    dry_run: bool,
    count: usize,
    removed: Vec<String>,
    elapsed_ms: u128,
}

impl From<&PruneReport> for JsonReport {
    fn from(report: &PruneReport) -> Self {
        Self {
            root: report.root.to_string_lossy().into_owned(),
            dry_run: report.dry_run,
            count: report.count(),
            removed: report
                .removed
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            elapsed_ms: report.elapsed.as_millis(),
        }
    }
}

/// Run the prune command.
pub fn run(args: &Cli, config: &Config) -> Result<PruneReport> {
    let options = PruneOptions {
        concurrency: args
            .concurrency
            .map(|n| n as usize)
            .unwrap_or(config.pruner.concurrency),
        dry_run: args.dry_run || config.pruner.dry_run,
    };

    // Fail on a bad path before printing anything
    let root = validate_root(&args.path)
        .with_context(|| format!("Cannot prune '{}'", args.path.display()))?;

    let human = !args.json && !args.quiet;
    if human {
        println!("Pruning: {}", root.display());
    }

    let pruner = Pruner::new(config.junk_rules(), options);
    let report = pruner.prune(&root)?;

    if args.json {
        print_json(&report)?;
    } else if human {
        print_report(&report);
    }

    Ok(report)
}

fn print_report(report: &PruneReport) {
    if report.dry_run {
        println!("[DRY RUN] Would remove:");
        for path in &report.removed {
            println!("  {}", path.display());
        }
        println!("Would remove: {} files and dirs", report.count());
    } else {
        println!("Removed: {} files and dirs", report.count());
    }
    println!("Prune time: {:.3?}", report.elapsed);
}

fn print_json(report: &PruneReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&JsonReport::from(report))?);
    Ok(())
}
