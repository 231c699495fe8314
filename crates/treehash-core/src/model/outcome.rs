/// The raw outcome of digesting one file, as produced by a worker.
///
/// Exactly one outcome exists per path the walker emits. The enum makes the
/// digest/error exclusivity structural: a file was either hashed or it
/// failed, never both, never neither.
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum FileOutcome {
    /// The file was opened and fully read; `digest` is the lowercase hex
    /// SHA-256 of its content at read time.
    Hashed { path: PathBuf, digest: String },

    /// The file could not be opened or read. The original cause is carried
    /// through to the log record, never reduced to a boolean.
    Failed { path: PathBuf, error: io::Error },
}

impl FileOutcome {
    /// The path this outcome describes, regardless of success.
    pub fn path(&self) -> &Path {
        match self {
            Self::Hashed { path, .. } | Self::Failed { path, .. } => path,
        }
    }
}
