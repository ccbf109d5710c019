//! Shared test utilities for sortscope
//!
//! Helpers for integration tests: TUI terminal rendering into a test
//! buffer, and trace-driving shortcuts used by several test modules.

pub mod terminal;

use sortscope::{build_trace, PlaybackEngine, SortKind, VisualState};

/// Build a trace for `input` and drive a fresh engine until Finished,
/// returning the terminal snapshot.
pub fn drive_to_completion(kind: SortKind, input: &[i32]) -> VisualState {
    let outcome = build_trace(kind, input);
    let mut engine = PlaybackEngine::new();
    engine
        .start(outcome.trace, input)
        .expect("engine must start from Idle");

    let mut last = engine.snapshot();
    while !last.is_finished() {
        last = engine.tick().expect("tick while Running");
    }
    last
}
