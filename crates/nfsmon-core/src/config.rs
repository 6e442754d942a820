//! Parser configuration.

use serde::Deserialize;

/// Settings consumed by the mountstats scanner.
///
/// Deserializable so a host configuration layer can embed it directly:
///
/// ```toml
/// fullstat = false
/// include_mounts = ["^/data"]
/// exclude_mounts = ["scratch"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Collect the low-level categories (events, bytes, xprt, per-operation
    /// tables) in addition to the READ/WRITE summaries.
    pub fullstat: bool,
    /// Regular expressions matched against the mount point. When non-empty,
    /// mounts that match none of them are ignored.
    pub include_mounts: Vec<String>,
    /// Regular expressions matched against the mount point. A match always
    /// excludes the mount, even if it is also included.
    pub exclude_mounts: Vec<String>,
}

impl ParserConfig {
    pub fn with_fullstat(mut self, fullstat: bool) -> Self {
        self.fullstat = fullstat;
        self
    }

    pub fn with_include_mounts<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_mounts = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude_mounts<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_mounts = patterns.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collects_summaries_only() {
        let config = ParserConfig::default();
        assert!(!config.fullstat);
        assert!(config.include_mounts.is_empty());
        assert!(config.exclude_mounts.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"fullstat": true, "exclude_mounts": ["^/scratch"]}"#)
                .unwrap();
        assert!(config.fullstat);
        assert!(config.include_mounts.is_empty());
        assert_eq!(config.exclude_mounts, vec!["^/scratch".to_string()]);
    }

    #[test]
    fn test_builders() {
        let config = ParserConfig::default()
            .with_fullstat(true)
            .with_include_mounts(["^/data", "^/home"])
            .with_exclude_mounts(vec!["tmp".to_string()]);
        assert!(config.fullstat);
        assert_eq!(config.include_mounts.len(), 2);
        assert_eq!(config.exclude_mounts, vec!["tmp".to_string()]);
    }
}
