//! Headless rendering checks for the UI components, using Ratatui's
//! TestBackend buffers.

use ratatui::{buffer::Buffer, layout::Rect};

use sortscope::ui::components::{BarPanel, GlobalFooter, StatusBar};
use sortscope::ui::InputMode;
use sortscope::{DataShape, SortKind};

use super::common::terminal::{buffer_contains, buffer_to_trimmed_string};

fn render_line(render: impl FnOnce(Rect, &mut Buffer)) -> Buffer {
    let area = Rect::new(0, 0, 80, 1);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buf
}

#[test]
fn footer_lists_the_playback_keys() {
    let buf = render_line(|area, buf| GlobalFooter::new().render(area, buf));
    let output = buffer_to_trimmed_string(&buf);
    insta::assert_snapshot!(
        output.trim(),
        @"s sort  space pause  r data  d shape  a algorithm  +/- speed  esc reset  q quit"
    );
}

#[test]
fn footer_switches_hints_in_the_algorithm_dialog() {
    let buf = render_line(|area, buf| {
        GlobalFooter::from_state(InputMode::SelectingAlgorithm).render(area, buf)
    });
    let output = buffer_to_trimmed_string(&buf);
    insta::assert_snapshot!(output.trim(), @"1-3 choose algorithm  esc cancel");
}

#[test]
fn status_bar_shows_algorithm_dataset_and_metrics() {
    let buf = render_line(|area, buf| {
        StatusBar::new(SortKind::Bubble, DataShape::Random, 5, 25).render(area, buf)
    });
    let output = buffer_to_trimmed_string(&buf);
    insta::assert_snapshot!(
        output.trim(),
        @"Bubble Sort  │ Random n=5 │ idle │ cmp 0  swp 0 │   0% │ 25 ev/s"
    );
}

#[test]
fn status_bar_appends_the_message_slot() {
    let buf = render_line(|area, buf| {
        StatusBar::new(SortKind::Quick, DataShape::Reversed, 8, 100)
            .message(Some("verified PASS"))
            .render(area, buf)
    });
    assert!(buffer_contains(&buf, "Quick Sort"));
    assert!(buffer_contains(&buf, "verified PASS"));
}

#[test]
fn bar_panel_draws_one_bar_per_element() {
    let area = Rect::new(0, 0, 8, 4);
    let mut buf = Buffer::empty(area);
    BarPanel::new(&[1, 2, 3, 4]).render(area, &mut buf);

    // Bottom row is solid (every bar has at least one cell), top row only
    // holds the tallest bar.
    let bottom: String = (0..8).map(|x| buf[(x, 3)].symbol()).collect();
    assert_eq!(bottom.matches('█').count(), 4);
    let top: String = (0..8).map(|x| buf[(x, 0)].symbol()).collect();
    assert_eq!(top.matches('█').count(), 1);
}
