pub mod config;
pub mod data;
pub mod headless;
pub mod playback;
pub mod sort;
pub mod trace;
pub mod ui;
pub mod util;
pub mod verify;

pub use config::{Cli, Config};
pub use data::{DataGenerator, DataShape, GenerateError};
pub use playback::{
    Highlight, HighlightKind, PlaybackEngine, PlaybackError, RunState, TickPacer, VisualState,
};
pub use sort::{ParseSortKindError, SortKind};
pub use trace::{build_trace, EventSink, Trace, TraceEvent, TraceOutcome};
pub use ui::App;
pub use verify::{is_sorted, validate, SortCheck};
