use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wagner_seeds::{Convention, RunInventory, grab_seeds_with, scan_runs};

/// List the seeds of wagner runs found in a results folder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder holding the simulation output files
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// Show the files each run left behind instead of the seeds alone
    #[arg(short, long)]
    files: bool,

    /// Log skipped and collected entries
    #[arg(short, long)]
    verbose: bool,
}

fn describe(run: &RunInventory) -> String {
    let mut parts = Vec::new();
    if run.info {
        parts.push("info".to_owned());
    }
    if run.network {
        parts.push("network".to_owned());
    }
    if !run.steps.is_empty() {
        let steps: Vec<String> = run.steps.iter().map(ToString::to_string).collect();
        parts.push(format!("species at t = {}", steps.join(", ")));
    }
    parts.join(", ")
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let convention = Convention::default();
    if args.files {
        for (seed, run) in scan_runs(&args.folder, &convention)? {
            println!("{seed}: {}", describe(&run));
        }
    } else {
        for seed in grab_seeds_with(&args.folder, &convention)? {
            println!("{seed}");
        }
    }
    Ok(())
}
