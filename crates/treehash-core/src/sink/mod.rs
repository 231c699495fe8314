/// Record sinks — where enriched digest records end up.
///
/// The aggregator's obligation stops at producing [`HashRecord`] values;
/// serialisation belongs to the sink. The production sink is an append-only
/// JSON-lines file (one object per record), but anything implementing
/// [`RecordSink`] can stand in — tests use an in-memory collector.
use crate::model::HashRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for enriched digest records.
pub trait RecordSink {
    /// Accept one record. Errors here are pipeline-fatal.
    fn record(&mut self, record: &HashRecord) -> io::Result<()>;

    /// Make previously accepted records durable. Called once, after the
    /// drain loop ends.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Append-only sink writing one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Open `path` for appending, creating it if absent.
    ///
    /// Called before the pipeline starts so an unavailable destination
    /// aborts the run before any work begins.
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an arbitrary writer (used by tests and embedders).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn record(&mut self, record: &HashRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(path: &str) -> HashRecord {
        HashRecord::Success {
            path: path.into(),
            digest: "ab".repeat(32),
            file_type: ".txt".into(),
            depth: 0,
        }
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = JsonLinesSink::new(&mut buf);
            sink.record(&success("a.txt")).unwrap();
            sink.record(&HashRecord::Failure {
                path: "b.bin".into(),
                error: "permission denied".into(),
            })
            .unwrap();
            sink.flush().unwrap();
        }

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        // Each line round-trips through serde on its own.
        let first: HashRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, success("a.txt"));
        assert!(lines[0].contains(r#""severity":"info""#));
        assert!(lines[1].contains(r#""severity":"error""#));
    }

    #[test]
    fn append_creates_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let log = tmp.path().join("records.log");

        let mut sink = JsonLinesSink::append(&log).unwrap();
        sink.record(&success("x")).unwrap();
        sink.flush().unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&log).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    /// Appending twice must preserve earlier records.
    #[test]
    fn append_is_append_only() {
        let tmp = tempfile::TempDir::new().unwrap();
        let log = tmp.path().join("records.log");

        for path in ["first", "second"] {
            let mut sink = JsonLinesSink::append(&log).unwrap();
            sink.record(&success(path)).unwrap();
            sink.flush().unwrap();
        }

        let content = std::fs::read_to_string(&log).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn append_fails_for_unwritable_destination() {
        let tmp = tempfile::TempDir::new().unwrap();
        // The parent directory does not exist — open must fail up front.
        let log = tmp.path().join("missing-dir").join("records.log");
        assert!(JsonLinesSink::append(&log).is_err());
    }
}
