/// The consumer stage — one worker's pull/digest/push loop.
///
/// Per-file errors are fully isolated: an unopenable or unreadable file
/// becomes a `Failed` outcome and the worker moves on. Nothing a single
/// file does can abort the pool.
use crossbeam_channel::{Receiver, Sender};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::hasher;
use crate::model::FileOutcome;

/// Read buffer per open file. 64 KiB keeps large-file throughput high
/// without a meaningful per-worker memory cost.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// One worker's main loop: pull paths until the job queue is closed and
/// empty, digest each file, push the outcome.
///
/// `jobs.iter()` blocks while the queue is empty and ends once it is both
/// closed and drained. `results.send` blocks when the aggregator lags —
/// that backpressure is deliberate. A failed send means the aggregator is
/// gone (sink failure), so the worker stops early.
pub(crate) fn run_worker(jobs: Receiver<PathBuf>, results: Sender<FileOutcome>) {
    for path in jobs.iter() {
        let outcome = digest_one(&path);
        if results.send(outcome).is_err() {
            break;
        }
    }
}

/// Digest a single file: open, stream through the hasher, report.
///
/// The file handle lives in `reader` and drops on every exit path, so the
/// descriptor is released deterministically whether the read succeeds or
/// fails.
pub(crate) fn digest_one(path: &Path) -> FileOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            return FileOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    };

    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    match hasher::digest_stream(&mut reader) {
        Ok(digest) => FileOutcome::Hashed {
            path: path.to_path_buf(),
            digest,
        },
        Err(error) => FileOutcome::Failed {
            path: path.to_path_buf(),
            error,
        },
    }
}
