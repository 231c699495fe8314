/// The producer stage — serial directory traversal feeding the job queue.
///
/// Uses `jwalk` driven with `Parallelism::Serial`: one thread, a lazy entry
/// sequence, per-entry error results. Enumeration overlaps hashing because
/// this runs on its own thread; the bounded job channel provides the
/// backpressure — `send` blocks once `workers` paths are in flight, so the
/// walk never buffers the whole tree.
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PipelineError;

/// Emit the path of every non-directory entry under `root` into `jobs`.
///
/// Returns the number of paths emitted, for the pipeline's cardinality
/// check. The first traversal error aborts the remaining walk and surfaces
/// as [`PipelineError::Traversal`] — a pipeline-fatal condition, not a
/// per-file failure. On every exit path the `jobs` sender drops here,
/// closing the queue exactly once.
pub(crate) fn emit_files(root: &Path, jobs: Sender<PathBuf>) -> Result<u64, PipelineError> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut emitted: u64 = 0;
    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                return Err(PipelineError::Traversal { path, source: err });
            }
        };

        // Directories are traversed but never emitted; symlinks and other
        // non-directories are digested like regular files (the worker's
        // open reports anything unreadable).
        if entry.file_type().is_dir() {
            continue;
        }

        // A failed send means every worker is gone — downstream shutdown,
        // typically after a sink failure. Stop walking.
        if jobs.send(entry.path()).is_err() {
            break;
        }
        emitted += 1;
    }

    debug!("Walk complete: {emitted} paths emitted from {}", root.display());
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Files are emitted, directories are not.
    #[test]
    fn emits_files_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("sub/b.txt"), "b").unwrap();

        let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(16);
        let emitted = emit_files(tmp.path(), tx).unwrap();

        let mut paths: Vec<PathBuf> = rx.iter().collect();
        paths.sort();
        assert_eq!(emitted, 2);
        assert_eq!(
            paths,
            vec![tmp.path().join("a.txt"), tmp.path().join("sub/b.txt")]
        );
    }

    /// An empty tree closes the queue without emitting anything.
    #[test]
    fn empty_tree_emits_nothing() {
        let tmp = TempDir::new().unwrap();
        let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(16);
        let emitted = emit_files(tmp.path(), tx).unwrap();
        assert_eq!(emitted, 0);
        // Sender dropped inside emit_files — the receiver observes disconnect.
        assert!(rx.iter().next().is_none());
    }
}
