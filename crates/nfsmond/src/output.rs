//! JSON-lines output of metric records.

use std::io::{self, Write};

use nfsmon_core::{MetricRecord, MetricSink};
use serde::Serialize;

#[derive(Serialize)]
struct OutputLine<'a> {
    timestamp: i64,
    #[serde(flatten)]
    record: &'a MetricRecord,
}

/// Writes each record as one JSON object per line.
///
/// All records of one gather share the same timestamp. The first write
/// error is kept and reported by [`finish`](Self::finish); later records are
/// dropped.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    timestamp: i64,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W, timestamp: i64) -> Self {
        Self {
            writer,
            timestamp,
            written: 0,
            error: None,
        }
    }

    /// Flushes the writer and returns how many records were written.
    pub fn finish(mut self) -> io::Result<usize> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.written)
    }

    fn write_record(&mut self, record: &MetricRecord) -> io::Result<()> {
        let line = OutputLine {
            timestamp: self.timestamp,
            record,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> MetricSink for JsonLinesSink<W> {
    fn add(&mut self, record: MetricRecord) {
        if self.error.is_some() {
            return;
        }
        match self.write_record(&record) {
            Ok(()) => self.written += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfsmon_core::{Measurement, Tags};

    fn record() -> MetricRecord {
        let mut record = MetricRecord::new(
            Measurement::NfsstatRead,
            Tags {
                mountpoint: "/mnt/data".into(),
                serverexport: "nas01:/export/data".into(),
            },
        );
        record.fields.insert("read_ops".into(), 10);
        record.fields.insert("read_bytes".into(), 300);
        record
    }

    #[test]
    fn test_json_line_layout() {
        let mut buf = Vec::new();
        let mut sink = JsonLinesSink::new(&mut buf, 1_700_000_000);
        sink.add(record());
        sink.add(record());
        assert_eq!(sink.finish().unwrap(), 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"timestamp":1700000000,"measurement":"nfsstat_read","tags":{"mountpoint":"/mnt/data","serverexport":"nas01:/export/data"},"fields":{"read_bytes":300,"read_ops":10}}"#
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_reported_once() {
        let mut sink = JsonLinesSink::new(BrokenPipe, 0);
        sink.add(record());
        sink.add(record());
        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
