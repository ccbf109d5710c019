use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::playback::{Highlight, HighlightKind};

const BAR_COLOR: Color = Color::Cyan;
const COMPARE_COLOR: Color = Color::Yellow;
const SWAP_COLOR: Color = Color::Red;
const PIVOT_COLOR: Color = Color::Magenta;
const SORTED_COLOR: Color = Color::Green;

/// Main panel: one vertical bar per array element, scaled to the panel
/// height, with the last-touched pair and the active pivot emphasized.
pub struct BarPanel<'a> {
    values: &'a [i32],
    highlight: Option<Highlight>,
    pivot: Option<usize>,
    finished: bool,
}

impl<'a> BarPanel<'a> {
    pub fn new(values: &'a [i32]) -> Self {
        Self {
            values,
            highlight: None,
            pivot: None,
            finished: false,
        }
    }

    pub fn highlight(mut self, highlight: Option<Highlight>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn pivot(mut self, pivot: Option<usize>) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.values.is_empty() {
            self.render_empty_message(area, buf);
            return;
        }

        let n = self.values.len();
        // Bars are scaled against the value span; a floor of zero keeps
        // all-positive datasets proportional to their values.
        let span_min = self.values.iter().copied().min().unwrap_or(0).min(0);
        let span_max = self.values.iter().copied().max().unwrap_or(1);
        let span = (i64::from(span_max) - i64::from(span_min)).max(1);

        for (index, value) in self.values.iter().enumerate() {
            // Columns this bar occupies; when n exceeds the width some
            // bars collapse to zero columns and are skipped.
            let x0 = area.x + (index * area.width as usize / n) as u16;
            let x1 = area.x + ((index + 1) * area.width as usize / n) as u16;
            if x1 == x0 {
                continue;
            }

            let fraction = (i64::from(*value) - i64::from(span_min)) as f64 / span as f64;
            let bar_height = ((fraction * f64::from(area.height)).round() as u16)
                .clamp(1, area.height);
            let color = self.bar_color(index);

            // Leave one column of gap when a bar is at least two wide.
            let draw_width = if x1 - x0 > 1 { x1 - x0 - 1 } else { 1 };
            for x in x0..x0 + draw_width {
                for dy in 0..bar_height {
                    let y = area.y + area.height - 1 - dy;
                    buf[(x, y)].set_char('█').set_fg(color);
                }
            }
        }
    }

    fn bar_color(&self, index: usize) -> Color {
        if self.finished {
            return SORTED_COLOR;
        }
        if let Some(highlight) = self.highlight {
            if index == highlight.a || index == highlight.b {
                return match highlight.kind {
                    HighlightKind::Compare => COMPARE_COLOR,
                    HighlightKind::Swap => SWAP_COLOR,
                };
            }
        }
        if self.pivot == Some(index) {
            return PIVOT_COLOR;
        }
        BAR_COLOR
    }

    fn render_empty_message(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from("no data: press r to generate a dataset");
        let paragraph = Paragraph::new(line)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        let y = area.y + area.height / 2;
        let row = Rect::new(area.x, y, area.width, 1);
        paragraph.render(row, buf);
    }
}
