//! `touchscroll` - replay a touch recording and print the surface calls.
//!
//! ```sh
//! touchscroll recording.json          # one call per line
//! touchscroll recording.json --json   # calls as JSON
//! RUST_LOG=touchscroll=trace touchscroll recording.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use touchscroll::replay::{Recording, replay};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "touchscroll")]
#[command(about = "Replay a touch recording and print the surface calls")]
struct Cli {
    /// Recording to replay
    recording: PathBuf,

    /// Print the calls as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let recording = Recording::load(&args.recording)
        .with_context(|| format!("Failed to load recording {}", args.recording.display()))?;

    let report = replay(&recording);

    if args.json {
        let json = serde_json::to_string_pretty(&report.calls)
            .context("Failed to serialize surface calls")?;
        println!("{json}");
    } else {
        for call in &report.calls {
            println!("{call}");
        }
        println!(
            "final offset: ({:.2}, {:.2})",
            report.final_offset.x, report.final_offset.y
        );
    }

    Ok(())
}
