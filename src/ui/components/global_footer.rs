use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::events::InputMode;

/// Global footer showing keyboard shortcuts in minimal style
pub struct GlobalFooter {
    hints: Vec<(&'static str, &'static str)>,
}

impl GlobalFooter {
    pub fn new() -> Self {
        Self {
            hints: Self::normal_hints(),
        }
    }

    /// Create footer from app state
    pub fn from_state(input_mode: InputMode) -> Self {
        Self {
            hints: match input_mode {
                InputMode::Normal => Self::normal_hints(),
                InputMode::SelectingAlgorithm => Self::selector_hints(),
            },
        }
    }

    fn normal_hints() -> Vec<(&'static str, &'static str)> {
        vec![
            ("s", "sort"),
            ("space", "pause"),
            ("r", "data"),
            ("d", "shape"),
            ("a", "algorithm"),
            ("+/-", "speed"),
            ("esc", "reset"),
            ("q", "quit"),
        ]
    }

    fn selector_hints() -> Vec<(&'static str, &'static str)> {
        vec![("1-3", "choose algorithm"), ("esc", "cancel")]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (index, (key, label)) in self.hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

impl Default for GlobalFooter {
    fn default() -> Self {
        Self::new()
    }
}
