pub mod builder;
pub mod event;

pub use builder::{build_trace, Trace, TraceOutcome};
pub use event::{EventSink, TraceEvent};
