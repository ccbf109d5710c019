pub mod engine;
pub mod pacer;
pub mod visual;

pub use engine::{PlaybackEngine, PlaybackError, RunState};
pub use pacer::{TickPacer, SPEED_STEPS};
pub use visual::{Highlight, HighlightKind, VisualState};
