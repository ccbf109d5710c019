use crate::playback::engine::RunState;

/// Why a pair of indices is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Compare,
    Swap,
}

/// The pair of indices the last applied event touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub a: usize,
    pub b: usize,
    pub kind: HighlightKind,
}

/// Rendering-facing snapshot of a playback session after one tick.
///
/// Pure data: the renderer draws bars from `values` and emphasis from
/// `highlight`/`pivot`; it never reaches back into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualState {
    /// Array contents with all trace events so far applied.
    pub values: Vec<i32>,
    /// Last touched index pair, if any.
    pub highlight: Option<Highlight>,
    /// Active pivot index, if any.
    pub pivot: Option<usize>,
    /// Compare events applied so far.
    pub comparisons: u64,
    /// Swap events applied so far.
    pub swaps: u64,
    /// Next event index to apply.
    pub cursor: usize,
    /// Total number of trace events, `Done` included.
    pub total: usize,
    pub run_state: RunState,
}

impl VisualState {
    /// Fraction of the trace applied so far, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.cursor as f64 / self.total as f64
        }
    }

    pub fn is_finished(&self) -> bool {
        self.run_state == RunState::Finished
    }
}
