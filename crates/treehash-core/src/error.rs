/// Pipeline-fatal errors.
///
/// Per-file failures are *data*, not errors — they travel through the result
/// queue as [`crate::model::FileOutcome::Failed`] and end up in the log like
/// any other record. Only conditions that stop the whole run live here.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The directory walk hit an unreadable entry and the remainder of the
    /// traversal was abandoned. Work already queued before the abort still
    /// drains and is logged.
    #[error("traversal aborted at {path}: {source}")]
    Traversal {
        path: String,
        source: jwalk::Error,
    },

    /// The record sink could not be written or flushed.
    #[error("record sink failure: {0}")]
    Sink(#[from] std::io::Error),
}
