/// Pipeline configuration.
///
/// All shared state (queues, worker handles) is scoped to a single
/// [`crate::pipeline::run`] call — the config is just the knobs.
use std::path::PathBuf;

/// Maximum digest results that may queue between the workers and the
/// aggregator.
///
/// The aggregator drains this channel sequentially while it serialises
/// records to the sink. A buffer of 100 lets workers run ahead through
/// bursts of small files; if the sink is genuinely slower than the pool,
/// `send` blocks and backpressure propagates all the way to the walker
/// rather than consuming unbounded heap.
pub const RESULT_CHANNEL_CAPACITY: usize = 100;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root of the directory tree to digest.
    pub root: PathBuf,

    /// Number of worker threads. Defaults to the logical CPU count.
    pub workers: usize,

    /// Capacity of the job queue between the walker and the workers.
    ///
    /// Kept at the worker count by default: deep enough that no worker
    /// starves while the walker stats the next directory, shallow enough
    /// that enumeration never runs far ahead of hashing.
    pub job_queue_capacity: usize,

    /// Capacity of the result queue between the workers and the aggregator.
    pub result_queue_capacity: usize,
}

impl PipelineConfig {
    /// Build a config with defaults derived from the machine.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let workers = num_cpus::get().max(1);
        Self {
            root: root.into(),
            workers,
            job_queue_capacity: workers,
            result_queue_capacity: RESULT_CHANNEL_CAPACITY,
        }
    }

    /// Override the worker count (clamped to at least 1). The job queue
    /// capacity follows the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        let workers = workers.max(1);
        self.workers = workers;
        self.job_queue_capacity = workers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_positive() {
        let config = PipelineConfig::new("/tmp");
        assert!(config.workers >= 1);
        assert!(config.job_queue_capacity >= 1);
        assert_eq!(config.result_queue_capacity, RESULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn with_workers_clamps_zero_to_one() {
        let config = PipelineConfig::new("/tmp").with_workers(0);
        assert_eq!(config.workers, 1);
        assert_eq!(config.job_queue_capacity, 1);
    }

    #[test]
    fn with_workers_tracks_job_queue_capacity() {
        let config = PipelineConfig::new("/tmp").with_workers(8);
        assert_eq!(config.workers, 8);
        assert_eq!(config.job_queue_capacity, 8);
    }
}
