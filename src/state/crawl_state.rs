//! Lifecycle states of a crawl run
//!
//! A run moves `Idle -> Running -> Completed` exactly once. Per-page work
//! (fetch, extract, merge, discover) happens entirely inside `Running`.

use std::fmt;

/// Represents the current state of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlState {
    /// Crawler constructed, corpus loaded, seed queued
    Idle,

    /// The BFS loop is processing pages
    Running,

    /// Frontier exhausted or page budget spent; final snapshot written
    Completed,
}

impl CrawlState {
    /// Returns true if a run may move from this state to `next`
    pub fn can_transition_to(&self, next: CrawlState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Completed)
        )
    }

    /// Lowercase name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
