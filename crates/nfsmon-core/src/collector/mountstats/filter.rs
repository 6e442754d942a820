//! Include/exclude filtering of mounts by mount point.

use regex::Regex;
use tracing::warn;

/// Compiled include/exclude rules.
///
/// Patterns are unanchored regular expressions. A pattern that fails to
/// compile never matches anything, but still counts towards "an include
/// list was configured".
#[derive(Debug, Clone, Default)]
pub struct MountFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    has_include: bool,
    has_exclude: bool,
}

impl MountFilter {
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Self {
        Self {
            include: compile_patterns(include, "include"),
            exclude: compile_patterns(exclude, "exclude"),
            has_include: !include.is_empty(),
            has_exclude: !exclude.is_empty(),
        }
    }

    /// Whether lines belonging to `mount_point` should be discarded.
    ///
    /// With an include list, only matching mounts are kept. Any exclude
    /// match discards the mount, overriding an include match.
    pub fn should_skip(&self, mount_point: &str) -> bool {
        let mut skip = false;
        if self.has_include {
            skip = !self.include.iter().any(|re| re.is_match(mount_point));
        }
        if self.has_exclude && self.exclude.iter().any(|re| re.is_match(mount_point)) {
            skip = true;
        }
        skip
    }

    pub fn is_empty(&self) -> bool {
        !self.has_include && !self.has_exclude
    }
}

fn compile_patterns<S: AsRef<str>>(patterns: &[S], kind: &str) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| {
            let p = p.as_ref();
            match Regex::new(p) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(pattern = p, kind, error = %e, "ignoring invalid mount pattern");
                    None
                }
            }
        })
        .collect()
}

/// One-shot form of [`MountFilter::should_skip`].
pub fn should_skip<S: AsRef<str>>(mount_point: &str, include: &[S], exclude: &[S]) -> bool {
    MountFilter::new(include, exclude).should_skip(mount_point)
}
