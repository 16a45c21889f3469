//! Push/streaming traffic classification.
//!
//! # Responsibilities
//! - Hold the configured set of push path prefixes
//! - Classify request paths (case-sensitive, literal prefix match)
//!
//! # Design Decisions
//! - Matching is byte-level and literal; no normalization, so trailing
//!   slash differences in configured prefixes are significant
//! - A prefix only matches up to a path-segment boundary: `/jobstatus`
//!   matches `/jobstatus` and `/jobstatus/123` but not `/jobstatusx`
//! - Safe to share across connection handlers without synchronization

/// The push endpoints served out of the box.
///
/// Bare and `/api/v1`-prefixed forms are independent entries, not derived
/// from one another.
pub fn default_prefixes() -> Vec<String> {
    [
        "/jobconnectbyid",
        "/api/v1/jobconnectbyid",
        "/jobconnectbyname",
        "/api/v1/jobconnectbyname",
        "/jobsubmitandconnect",
        "/api/v1/jobsubmitandconnect",
        "/jobClusters/discoveryInfoStream",
        "/api/v1/jobClusters/discoveryInfoStream",
        "/jobstatus",
        "/api/v1/jobstatus",
        "/jobs/schedulingInfo/",
        "/api/v1/jobs/schedulingInfo/",
    ]
    .iter()
    .map(|prefix| prefix.to_string())
    .collect()
}

/// Immutable set of path prefixes that select the push/streaming pipeline.
///
/// Built once from configuration and shared read-only with every listener
/// binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPrefixSet {
    prefixes: Vec<String>,
}

impl PushPrefixSet {
    /// Build a prefix set, preserving insertion order.
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// True if `path` starts with any configured prefix.
    ///
    /// Never fails; a path that matches nothing is standard traffic.
    pub fn is_push_path(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| Self::prefix_matches(prefix, path))
    }

    /// Literal prefix match, aligned to a path-segment boundary so a prefix
    /// never matches partway through a segment name.
    fn prefix_matches(prefix: &str, path: &str) -> bool {
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
            None => false,
        }
    }

    /// Number of configured prefixes.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// True if no prefixes are configured.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate the configured prefixes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

impl Default for PushPrefixSet {
    fn default() -> Self {
        Self::new(default_prefixes())
    }
}
