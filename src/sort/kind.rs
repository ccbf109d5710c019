use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::sort::{bubble, quick, shaker};
use crate::trace::EventSink;

/// The closed set of supported sorting algorithms.
///
/// Each kind maps to a pure in-place sort function; dispatch stays a
/// single exhaustive match so adding a variant is a compile-time event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKind {
    Bubble,
    Shaker,
    Quick,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::Bubble, SortKind::Shaker, SortKind::Quick];

    /// Human-readable algorithm name for menus and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Shaker => "Shaker Sort",
            SortKind::Quick => "Quick Sort",
        }
    }

    /// Sort `data` in place, reporting every comparison, swap, and pivot
    /// choice to `sink`. Does not emit the terminal `Done` event.
    pub fn run(self, data: &mut [i32], sink: &mut dyn EventSink) {
        match self {
            SortKind::Bubble => bubble::sort(data, sink),
            SortKind::Shaker => shaker::sort(data, sink),
            SortKind::Quick => quick::sort(data, sink),
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for an algorithm selector that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort algorithm {0:?} (expected bubble, shaker, or quick)")]
pub struct ParseSortKindError(pub String);

impl FromStr for SortKind {
    type Err = ParseSortKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortKind::Bubble),
            "shaker" => Ok(SortKind::Shaker),
            "quick" => Ok(SortKind::Quick),
            _ => Err(ParseSortKindError(s.to_string())),
        }
    }
}
