// Screen layout: panel arrangement, sizing and mouse hit-testing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Lineup Table (9 rows + header + borders)          |
// +--------------------------------------------------+
// | Picker Panel (fill)                               |
// |  +- Search (3 rows) ---------------------------+  |
// |  +- Results (fill) ----------------------------+  |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use dugout_core::board::LINEUP_SIZE;

/// Rows above the first lineup row inside the table area (border + header).
const LINEUP_TABLE_TOP: u16 = 2;

/// Height of the lineup table: one row per slot, a header, and two borders.
pub const LINEUP_HEIGHT: u16 = LINEUP_SIZE as u16 + 3;

/// Height of the search input box.
const SEARCH_HEIGHT: u16 = 3;

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: category tabs and pick counter.
    pub status_bar: Rect,
    /// The nine lineup slots.
    pub lineup: Rect,
    /// Search box and results while a slot is open; a hint otherwise.
    pub picker: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Split of the picker zone.
#[derive(Debug, Clone)]
pub struct PickerLayout {
    pub search: Rect,
    pub results: Rect,
}

/// Build the screen layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // status bar
            Constraint::Length(LINEUP_HEIGHT), // lineup table
            Constraint::Min(SEARCH_HEIGHT + 3), // picker panel
            Constraint::Length(1),             // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        lineup: vertical[1],
        picker: vertical[2],
        help_bar: vertical[3],
    }
}

/// Split the picker zone into the search box and the result list.
pub fn build_picker_layout(area: Rect) -> PickerLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(1)])
        .split(area);

    PickerLayout {
        search: vertical[0],
        results: vertical[1],
    }
}

/// Number of list rows visible inside a bordered box of this area.
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// First visible entry index so that `cursor` stays on screen.
///
/// Shared by the renderer and the mouse handler so a click always lands on
/// the entry that was drawn under it.
pub fn list_window_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor.saturating_sub(visible - 1)
}

/// Lineup rows that fit below the header inside the table borders.
pub fn lineup_visible_rows(lineup: Rect) -> usize {
    lineup.height.saturating_sub(LINEUP_TABLE_TOP + 1) as usize
}

/// Whether (`column`, `row`) is strictly inside the borders of `area`.
fn inside_borders(area: Rect, column: u16, row: u16) -> bool {
    column > area.x
        && column + 1 < area.x + area.width
        && row > area.y
        && row + 1 < area.y + area.height
}

/// Lineup slot index under a terminal cell, if any. `offset` is the first
/// slot drawn, which is nonzero when the table is too short for all nine.
pub fn lineup_row_at(lineup: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
    if !inside_borders(lineup, column, row) || row < lineup.y + LINEUP_TABLE_TOP {
        return None;
    }
    let index = offset + (row - lineup.y - LINEUP_TABLE_TOP) as usize;
    (index < LINEUP_SIZE).then_some(index)
}

/// Result-list row under a terminal cell, as an index into the visible
/// window starting at `offset`. Callers still bound it by the result count.
pub fn result_row_at(results: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
    if !inside_borders(results, column, row) {
        return None;
    }
    Some(offset + (row - results.y - 1) as usize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
