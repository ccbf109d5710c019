use std::time::Duration;

use crate::trace::TraceOutcome;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Background trace build finished
    TraceReady {
        /// Build request this outcome answers; stale requests are dropped.
        request: u64,
        outcome: TraceOutcome,
        build_time: Duration,
    },

    /// Request to quit the application
    Quit,

    /// Error occurred
    Error(String),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - playback keys active
    #[default]
    Normal,
    /// Selecting algorithm for the next sort
    SelectingAlgorithm,
}
