//! Line classification for `/proc/self/mountstats`.
//!
//! The file is a sequence of per-mount blocks:
//!
//! ```text
//! device nas:/export mounted on /mnt/data with fstype nfs statvers=1.1
//!     opts:   rw,vers=3,rsize=1048576,...
//!     age:    4218
//!     events: 52 6104 0 31 1024 ...
//!     bytes:  1048576 0 0 0 1048576 0 256 0
//!     RPC iostats version: 1.0  p/v: 100003/3 (nfs)
//!     xprt:   tcp 875 1 1 0 16 2108 2108 0 2108 0 2 0 0
//!     per-op statistics
//!             NULL: 0 0 0 0 0 0 0 0
//!          GETATTR: 1024 1024 0 112640 114688 3 512 530
//!     ...
//! ```
//!
//! A line may carry a mount boundary, a protocol version marker, and a
//! statistics category at the same time; the classifier reports all three
//! and leaves it to the scanner to apply them.

use super::fields::Operation;

/// Statistics category named by the first token of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Events,
    Bytes,
    Xprt,
    Operation(Operation),
}

impl Category {
    /// Parses a category token; a trailing `:` is ignored.
    pub fn parse(token: &str) -> Option<Self> {
        let name = token.strip_suffix(':').unwrap_or(token);
        match name {
            "events" => Some(Category::Events),
            "bytes" => Some(Category::Bytes),
            "xprt" => Some(Category::Xprt),
            other => Operation::from_name(other).map(Category::Operation),
        }
    }
}

/// `device <export> mounted on <mount point> with fstype nfs[4] ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountBoundary<'a> {
    /// Local mount point (token 4). Mount filters match against this.
    pub mount_point: &'a str,
    /// Server export (token 1).
    pub export: &'a str,
}

/// Everything a single tokenized line says about the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClass<'a> {
    pub boundary: Option<MountBoundary<'a>>,
    /// Raw version string from `p/v: 100003/<version>`.
    pub version: Option<&'a str>,
    pub category: Option<Category>,
}

/// Classifies a line already split on whitespace.
pub fn classify<'a>(tokens: &[&'a str]) -> LineClass<'a> {
    LineClass {
        boundary: mount_boundary(tokens),
        version: version_marker(tokens),
        category: tokens.first().and_then(|t| Category::parse(t)),
    }
}

fn mount_boundary<'a>(tokens: &[&'a str]) -> Option<MountBoundary<'a>> {
    if tokens.len() > 4
        && tokens.contains(&"fstype")
        && (tokens.contains(&"nfs") || tokens.contains(&"nfs4"))
    {
        Some(MountBoundary {
            mount_point: tokens[4],
            export: tokens[1],
        })
    } else {
        None
    }
}

fn version_marker<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    if tokens.len() > 5 && (tokens.contains(&"(nfs)") || tokens.contains(&"(nfs4)")) {
        tokens[5].split('/').nth(1)
    } else {
        None
    }
}
