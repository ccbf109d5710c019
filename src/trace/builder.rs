use std::sync::Arc;

use crate::sort::SortKind;
use crate::trace::event::TraceEvent;

/// Immutable, ordered log of the events one sort run emitted.
///
/// Built once per sort request and never mutated afterwards; the final
/// event is always the single `Done` sentinel. A trace is shared behind
/// `Arc` so several playback engines can replay it without rebuilding.
#[derive(Debug, Clone)]
pub struct Trace {
    algorithm: SortKind,
    events: Vec<TraceEvent>,
}

impl Trace {
    /// Which algorithm produced this trace.
    pub fn algorithm(&self) -> SortKind {
        self.algorithm
    }

    /// Total number of events, `Done` included.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<TraceEvent> {
        self.events.get(index).copied()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
}

/// Result of one trace build: the event log plus the fully-sorted copy
/// of the input the algorithm produced while the log was recorded.
#[derive(Debug, Clone)]
pub struct TraceOutcome {
    pub trace: Arc<Trace>,
    pub sorted: Vec<i32>,
}

/// Run `algorithm` over a private copy of `reference` and record every
/// emitted event, terminated by `Done`.
///
/// The caller's array is never mutated. Identical inputs always produce
/// identical traces; none of the variants use randomness.
pub fn build_trace(algorithm: SortKind, reference: &[i32]) -> TraceOutcome {
    let mut working = reference.to_vec();
    let mut events: Vec<TraceEvent> = Vec::new();

    algorithm.run(&mut working, &mut events);
    events.push(TraceEvent::Done);

    debug_assert_eq!(
        events.iter().filter(|e| **e == TraceEvent::Done).count(),
        1
    );

    tracing::debug!(
        algorithm = algorithm.display_name(),
        n = reference.len(),
        events = events.len(),
        "trace built"
    );

    TraceOutcome {
        trace: Arc::new(Trace { algorithm, events }),
        sorted: working,
    }
}
