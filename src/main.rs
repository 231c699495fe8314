//! TreeHash — concurrent file digester.
//!
//! Thin binary entry point. All pipeline logic lives in the
//! `treehash-core` crate.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use treehash_core::config::PipelineConfig;
use treehash_core::pipeline;
use treehash_core::sink::JsonLinesSink;

/// Digest every file under a directory tree with a bounded worker pool and
/// log one JSON record per file.
#[derive(Debug, Parser)]
#[command(name = "treehash", version, about)]
struct Args {
    /// Root directory to digest.
    root: PathBuf,

    /// Worker thread count (defaults to the logical CPU count).
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Append-only JSON-lines destination for per-file records.
    #[arg(long, default_value = "file-hashes.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging for process diagnostics; the per-file
    // records go to the JSON-lines sink, not to tracing.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let mut config = PipelineConfig::new(args.root);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }

    // Sink availability is checked before any work starts: an unwritable
    // log destination aborts the whole run up front.
    let mut sink = JsonLinesSink::append(&args.log_file)
        .with_context(|| format!("failed to open log file {}", args.log_file.display()))?;

    let summary = pipeline::run(&config, &mut sink)?;

    tracing::info!(
        "File processing complete: {} hashed, {} failed in {:?}. See {} for details.",
        summary.hashed,
        summary.failed,
        summary.duration,
        args.log_file.display()
    );
    Ok(())
}
