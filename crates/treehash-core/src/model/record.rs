/// The enriched record the aggregator hands to the sink.
///
/// `file_type` and `depth` depend only on the path, so they are derived here
/// (on the aggregator's thread) rather than inside the workers. The serde
/// representation is internally tagged with `severity` so the JSON-lines
/// output reads like a structured log: `{"severity":"info",...}` for a
/// successful digest, `{"severity":"error",...}` for a failure.
use crate::model::FileOutcome;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "severity")]
pub enum HashRecord {
    #[serde(rename = "info")]
    Success {
        path: String,
        digest: String,
        file_type: String,
        depth: usize,
    },
    #[serde(rename = "error")]
    Failure { path: String, error: String },
}

impl HashRecord {
    /// Enrich a worker outcome into a log record. `root` is the scan root
    /// the depth is measured against.
    pub fn from_outcome(outcome: FileOutcome, root: &Path) -> Self {
        match outcome {
            FileOutcome::Hashed { path, digest } => Self::Success {
                file_type: file_type(&path),
                depth: depth(&path, root),
                path: path.to_string_lossy().into_owned(),
                digest,
            },
            FileOutcome::Failed { path, error } => Self::Failure {
                path: path.to_string_lossy().into_owned(),
                error: error.to_string(),
            },
        }
    }

    /// The recorded path, regardless of severity.
    pub fn path(&self) -> &str {
        match self {
            Self::Success { path, .. } | Self::Failure { path, .. } => path,
        }
    }
}

/// The file-name suffix from the last `.` onward, verbatim (case and dot
/// preserved): `report.TXT` → `.TXT`, `archive.tar.gz` → `.gz`,
/// `.bashrc` → `.bashrc`. A name with no dot yields the empty string.
pub fn file_type(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(i) => name[i..].to_string(),
        None => String::new(),
    }
}

/// Nesting depth of `path` below `root`: a file directly inside the root has
/// depth 0, each additional directory level adds 1.
pub fn depth(path: &Path, root: &Path) -> usize {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().count().saturating_sub(1)
}
