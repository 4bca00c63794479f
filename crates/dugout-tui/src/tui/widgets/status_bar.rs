// Status bar widget: pick counter, draft position, category tabs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use dugout_core::board::{DraftBoard, LINEUP_SIZE};
use dugout_core::category::{StatCategory, ALL_CATEGORIES};

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [pick counter] [slot status] | [category tabs]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            format!(" Picks {}/{}", state.board.filled_count(), LINEUP_SIZE),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
    ];

    let (status, color) = slot_status(&state.board);
    spans.push(Span::styled(status, Style::default().fg(color)));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    spans.extend(category_spans(state.category));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Short description of where the draft stands, with its color.
pub fn slot_status(board: &DraftBoard) -> (String, Color) {
    match (board.selected(), board.first_empty_index()) {
        (Some(i), _) => (format!("Picking slot {}", i + 1), Color::LightGreen),
        (None, Some(i)) => (format!("Next: slot {}", i + 1), Color::Yellow),
        (None, None) => ("Lineup complete".to_string(), Color::Green),
    }
}

/// Category tabs with the active one highlighted, e.g. "[HR] [BA] [OPS+] [WAR] [OBP]".
pub fn category_spans(active: StatCategory) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for category in ALL_CATEGORIES {
        let style = if category == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", category.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
