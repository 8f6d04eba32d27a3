use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};

/// Create a centered rect of given size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Rows `text` needs when wrapped at `width` columns. Empty lines still take a row.
pub fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    let rows = if width == 0 {
        text.lines.len()
    } else {
        let width = usize::from(width);
        text.lines
            .iter()
            .map(|line| line.width().div_ceil(width).max(1))
            .sum()
    };
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Display columns of `line`, saturating at `u16::MAX`.
pub fn line_width(line: &Line<'_>) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

/// The text of a line without styling, used for accessible labels.
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Draw a horizontal separator across `area` at row `y`.
pub fn rule(buf: &mut Buffer, y: u16, area: Rect, style: Style) {
    if area.width == 0 {
        return;
    }
    buf.set_string(area.x, y, "─".repeat(area.width as usize), style);
}
