use std::sync::Arc;

use crate::playback::visual::{Highlight, HighlightKind, VisualState};
use crate::trace::{Trace, TraceEvent};

/// Playback session lifecycle. Running and Paused toggle freely; Finished
/// is reached once `Done` is applied, and `reset` returns to Idle from
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Finished => "finished",
        }
    }
}

/// Operation attempted in a state that does not allow it. The engine never
/// self-corrects; the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("cannot {op} while playback is {}", .state.label())]
    InvalidState { op: &'static str, state: RunState },
}

/// Scheduler that replays a trace one event per tick against an owned
/// visual array.
///
/// The engine knows nothing about wall-clock time: an external driver
/// decides when to call [`tick`](Self::tick), which is what makes playback
/// pausable and replayable out of real time.
#[derive(Debug, Default)]
pub struct PlaybackEngine {
    trace: Option<Arc<Trace>>,
    visual: Vec<i32>,
    cursor: usize,
    highlight: Option<Highlight>,
    pivot: Option<usize>,
    comparisons: u64,
    swaps: u64,
    state: RunState,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Install a fresh session over `trace`, with the visual array seeded
    /// from the pre-sort snapshot, and transition to Running.
    ///
    /// Valid from Idle or Finished only.
    pub fn start(&mut self, trace: Arc<Trace>, initial: &[i32]) -> Result<(), PlaybackError> {
        match self.state {
            RunState::Idle | RunState::Finished => {}
            state => return Err(PlaybackError::InvalidState { op: "start", state }),
        }

        tracing::debug!(
            algorithm = trace.algorithm().display_name(),
            events = trace.len(),
            n = initial.len(),
            "playback started"
        );

        self.visual = initial.to_vec();
        self.trace = Some(trace);
        self.cursor = 0;
        self.highlight = None;
        self.pivot = None;
        self.comparisons = 0;
        self.swaps = 0;
        self.state = RunState::Running;
        Ok(())
    }

    /// Apply the next trace event to the visual state and return the
    /// updated snapshot.
    ///
    /// Valid while Running. Once `Done` has been applied the engine is
    /// Finished and further calls are idempotent no-ops returning the
    /// terminal snapshot, so an over-firing driver can drain safely.
    pub fn tick(&mut self) -> Result<VisualState, PlaybackError> {
        match self.state {
            RunState::Running => {}
            RunState::Finished => return Ok(self.snapshot()),
            state => return Err(PlaybackError::InvalidState { op: "tick", state }),
        }

        let event = self.trace.as_ref().and_then(|t| t.get(self.cursor));
        match event {
            Some(event) => {
                self.apply(event);
                self.cursor += 1;
            }
            // Cursor past the last event without a Done; treat as finished.
            None => self.state = RunState::Finished,
        }

        Ok(self.snapshot())
    }

    /// Suspend ticking without losing position. Valid while Running.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                Ok(())
            }
            state => Err(PlaybackError::InvalidState { op: "pause", state }),
        }
    }

    /// Continue from the same cursor; no events are skipped or replayed.
    /// Valid while Paused.
    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        match self.state {
            RunState::Paused => {
                self.state = RunState::Running;
                Ok(())
            }
            state => Err(PlaybackError::InvalidState { op: "resume", state }),
        }
    }

    /// Abandon the session from any state and return to Idle, discarding
    /// the visual array and counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current state as an owned snapshot; also what `tick` returns.
    pub fn snapshot(&self) -> VisualState {
        VisualState {
            values: self.visual.clone(),
            highlight: self.highlight,
            pivot: self.pivot,
            comparisons: self.comparisons,
            swaps: self.swaps,
            cursor: self.cursor,
            total: self.trace.as_ref().map(|t| t.len()).unwrap_or(0),
            run_state: self.state,
        }
    }

    fn apply(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Compare { i, j } => {
                self.comparisons += 1;
                self.highlight = Some(Highlight {
                    a: i,
                    b: j,
                    kind: HighlightKind::Compare,
                });
            }
            TraceEvent::Swap { i, j } => {
                self.swaps += 1;
                self.visual.swap(i, j);
                self.highlight = Some(Highlight {
                    a: i,
                    b: j,
                    kind: HighlightKind::Swap,
                });
            }
            TraceEvent::PivotSet { index } => self.pivot = index,
            TraceEvent::Done => {
                self.highlight = None;
                self.pivot = None;
                self.state = RunState::Finished;
                tracing::debug!(
                    comparisons = self.comparisons,
                    swaps = self.swaps,
                    "playback finished"
                );
            }
        }
    }
}
