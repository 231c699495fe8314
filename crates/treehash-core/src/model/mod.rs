/// Data carried between pipeline stages.
///
/// Re-exports the worker output type and the enriched log record.
pub mod outcome;
pub mod record;

pub use outcome::FileOutcome;
pub use record::HashRecord;
