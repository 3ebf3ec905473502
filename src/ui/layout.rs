//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Width of an XP toast popup.
const TOAST_WIDTH: u16 = 34;
/// Height of an XP toast popup.
const TOAST_HEIGHT: u16 = 3;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Tab bar area (bottom, mirroring the source's bottom navigation).
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Tab bar
            ])
            .split(area);

        Self {
            status_area: chunks[0],
            main_area: chunks[1],
            tab_area: chunks[2],
        }
    }
}

/// Area for the i-th XP toast, stacked from the top-right corner.
pub fn toast_rect(area: Rect, index: usize) -> Option<Rect> {
    let x = area.width.checked_sub(TOAST_WIDTH + 2)?;
    let y = 2 + index as u16 * TOAST_HEIGHT;
    if y + TOAST_HEIGHT > area.height {
        return None;
    }
    Some(Rect {
        x,
        y,
        width: TOAST_WIDTH,
        height: TOAST_HEIGHT,
    })
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
