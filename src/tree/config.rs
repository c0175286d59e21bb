//! Configuration types for scanning

/// What to do when a single walk entry cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first unreadable entry and report the scan as aborted.
    #[default]
    FailFast,
    /// Record the failure and keep walking.
    BestEffort,
}

/// Configuration for scanning a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Descend through symbolic links (off by default; a link is tallied as a file)
    pub follow_links: bool,
    pub error_policy: ErrorPolicy,
}
