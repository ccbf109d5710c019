use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::data::DataShape;
use crate::playback::{RunState, VisualState};
use crate::sort::SortKind;

/// Status bar line: algorithm, dataset, run state, metrics, and speed.
pub struct StatusBar {
    algorithm: SortKind,
    shape: DataShape,
    size: usize,
    rate: u32,
    state: RunState,
    comparisons: u64,
    swaps: u64,
    progress: f64,
    message: Option<String>,
}

impl StatusBar {
    pub fn new(algorithm: SortKind, shape: DataShape, size: usize, rate: u32) -> Self {
        Self {
            algorithm,
            shape,
            size,
            rate,
            state: RunState::Idle,
            comparisons: 0,
            swaps: 0,
            progress: 0.0,
            message: None,
        }
    }

    /// Fill run state, counters, and progress from a playback snapshot.
    pub fn snapshot(mut self, snapshot: &VisualState) -> Self {
        self.state = snapshot.run_state;
        self.comparisons = snapshot.comparisons;
        self.swaps = snapshot.swaps;
        self.progress = snapshot.progress();
        self
    }

    /// Trailing message slot: verification verdict or last error.
    pub fn message(mut self, message: Option<&str>) -> Self {
        self.message = message.map(str::to_string);
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let state_color = match self.state {
            RunState::Idle => Color::DarkGray,
            RunState::Running => Color::Green,
            RunState::Paused => Color::Yellow,
            RunState::Finished => Color::Cyan,
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.algorithm.display_name()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(
                format!("{} n={}", self.shape.display_name(), self.size),
                Style::default().fg(Color::Gray),
            ),
            separator.clone(),
            Span::styled(self.state.label(), Style::default().fg(state_color)),
            separator.clone(),
            Span::styled(
                format!("cmp {}  swp {}", self.comparisons, self.swaps),
                Style::default().fg(Color::Gray),
            ),
            separator.clone(),
            Span::styled(
                format!("{:>3.0}%", self.progress * 100.0),
                Style::default().fg(Color::Gray),
            ),
            separator.clone(),
            Span::styled(
                format!("{} ev/s", self.rate),
                Style::default().fg(Color::Gray),
            ),
        ];

        if let Some(message) = &self.message {
            spans.push(separator);
            let color = if message.contains("FAIL") || message.contains("error") {
                Color::Red
            } else {
                Color::Green
            };
            spans.push(Span::styled(message.clone(), Style::default().fg(color)));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 20, 20)));
        paragraph.render(area, buf);
    }
}
