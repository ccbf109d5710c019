//! TUI testing utilities using Ratatui's TestBackend
//!
//! Provides helpers for rendering UI components to a test buffer
//! and converting the output to strings for snapshot testing.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string for snapshot testing
///
/// Preserves exact spacing and newlines for accurate comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Convert buffer to string, trimming trailing whitespace per line
///
/// This is more useful for snapshot comparisons where trailing
/// spaces are not meaningful.
pub fn buffer_to_trimmed_string(buffer: &Buffer) -> String {
    buffer_to_string(buffer)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}
