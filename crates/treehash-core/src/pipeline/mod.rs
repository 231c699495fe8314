/// Pipeline orchestration — wires the four concurrent stages together.
///
/// ```text
/// walker ──(job queue)──▶ worker pool ──(result queue)──▶ aggregator ──▶ sink
///                              │
///                  completion monitor (joins workers,
///                  then closes the result queue)
/// ```
///
/// Both queues are bounded crossbeam channels, the only shared mutable
/// state in the pipeline; everything is constructed inside [`run`] and
/// released when it returns. The completion monitor must be its own thread:
/// if the drain loop also had to join the workers, the aggregator would
/// wait for a close that only happens after the drain — a deadlock.
pub mod walker;
pub mod workers;

use crossbeam_channel::bounded;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::model::{FileOutcome, HashRecord};
use crate::sink::RecordSink;

/// Totals for one completed pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Files successfully digested.
    pub hashed: u64,
    /// Files that produced a failure record (open or read error).
    pub failed: u64,
    /// Wall-clock duration of the whole run.
    pub duration: Duration,
}

/// Run the digest pipeline to completion, writing one record per file to
/// `sink`.
///
/// The calling thread becomes the aggregator: it drains the result queue in
/// arrival order (no cross-file ordering guarantee), enriches each outcome
/// with `file_type` and `depth`, and forwards it to the sink. The function
/// returns once the result queue is closed and empty.
///
/// A traversal error aborts further enumeration but is surfaced only after
/// the drain finishes, so work dispatched before the abort is still logged.
pub fn run(
    config: &PipelineConfig,
    sink: &mut dyn RecordSink,
) -> Result<PipelineSummary, PipelineError> {
    let start = Instant::now();
    let workers = config.workers.max(1);

    info!(
        "Starting digest pipeline over {} with {workers} workers",
        config.root.display()
    );

    let (job_tx, job_rx) = bounded::<PathBuf>(config.job_queue_capacity.max(1));
    let (result_tx, result_rx) = bounded::<FileOutcome>(config.result_queue_capacity.max(1));

    // Producer: enumerates the tree, blocks on job-queue-full.
    let root = config.root.clone();
    let walker_handle = thread::Builder::new()
        .name("treehash-walker".into())
        .spawn(move || walker::emit_files(&root, job_tx))
        .expect("failed to spawn walker thread");

    // Worker pool: each worker owns a receiver clone and a sender clone.
    let mut worker_handles = Vec::with_capacity(workers);
    for i in 0..workers {
        let jobs = job_rx.clone();
        let results = result_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("treehash-worker-{i}"))
            .spawn(move || workers::run_worker(jobs, results))
            .expect("failed to spawn worker thread");
        worker_handles.push(handle);
    }
    drop(job_rx);

    // Completion monitor: joining every worker is the barrier; dropping the
    // last result sender afterwards closes the result queue exactly once,
    // which is what lets the drain loop below terminate.
    let monitor_handle = thread::Builder::new()
        .name("treehash-monitor".into())
        .spawn(move || {
            for handle in worker_handles {
                let _ = handle.join();
            }
            drop(result_tx);
        })
        .expect("failed to spawn completion monitor thread");

    // Aggregator: the sequential tail of the pipeline, on this thread.
    let mut summary = PipelineSummary::default();
    for outcome in result_rx.iter() {
        let record = HashRecord::from_outcome(outcome, &config.root);
        match &record {
            HashRecord::Success { .. } => summary.hashed += 1,
            HashRecord::Failure { .. } => summary.failed += 1,
        }
        // A sink failure aborts the run; dropping the receiver on the way
        // out disconnects the channels, and walker and workers unwind on
        // their next send.
        sink.record(&record)?;
    }
    sink.flush()?;

    let emitted = walker_handle
        .join()
        .expect("walker thread panicked")?;
    let _ = monitor_handle.join();

    debug_assert_eq!(
        emitted,
        summary.hashed + summary.failed,
        "pipeline dropped or duplicated a result"
    );

    summary.duration = start.elapsed();
    debug!(
        "Pipeline complete: {} hashed, {} failed in {:?}",
        summary.hashed, summary.failed, summary.duration
    );
    Ok(summary)
}
