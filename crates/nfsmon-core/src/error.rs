//! Error types for mountstats collection.
//!
//! Only scan-level failures are errors. Per-line problems (short lines,
//! unknown categories, unparsable numbers, bad filter patterns) are absorbed
//! by the scanner and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure that terminates a single gather.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The statistics file could not be opened or read as a whole.
    #[error("failed to read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A streaming read failed part way through the file.
    #[error("read error after {line} lines: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}
