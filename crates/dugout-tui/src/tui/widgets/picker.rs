// Player picker panel: search box plus the matching players.
//
// Only shown while a slot is open. Entries keep dataset order and read
// "Name — Team — value LABEL". When no slot is open the zone shows a short
// hint instead.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use dugout_core::board::{DraftBoard, LINEUP_SIZE};
use dugout_core::category::StatCategory;
use dugout_core::player::PlayerRecord;

use crate::tui::layout::{build_picker_layout, list_window_offset, visible_rows};
use crate::tui::ViewState;

/// Placeholder shown in an empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search players...";

/// One picker entry, e.g. "Roger Maris — NYY — 61 HR".
pub fn format_entry(player: &PlayerRecord, category: StatCategory) -> String {
    format!(
        "{} — {} — {} {}",
        player.name,
        player.team,
        category.display_value(player),
        category.label()
    )
}

/// Text shown in the picker zone while no slot is open.
pub fn hint_text(board: &DraftBoard) -> String {
    match board.first_empty_index() {
        Some(i) => format!(
            "Select slot {} (Enter or click) to pick a player.",
            i + 1
        ),
        None => format!("Lineup complete: all {} slots filled.", LINEUP_SIZE),
    }
}

/// Render the picker zone.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(slot) = state.board.selected() else {
        render_hint(frame, area, &state.board);
        return;
    };

    let layout = build_picker_layout(area);
    render_search(frame, layout.search, state, slot);
    render_results(frame, layout.results, state);
}

fn render_hint(frame: &mut Frame, area: Rect, board: &DraftBoard) {
    let paragraph = Paragraph::new(format!("  {}", hint_text(board)))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Picker"));
    frame.render_widget(paragraph, area);
}

fn render_search(frame: &mut Frame, area: Rect, state: &ViewState, slot: usize) {
    let search = state.board.search();
    let content = if search.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(search.to_string(), Style::default().fg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen))
        .title(Span::styled(
            format!(" Pick a Player for Slot {} ", slot + 1),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    // Terminal cursor at the end of the typed text.
    if area.width > 2 && area.height > 2 {
        let typed = u16::try_from(search.chars().count()).unwrap_or(u16::MAX);
        let last = area.x + area.width - 2;
        let x = area.x.saturating_add(1).saturating_add(typed).min(last);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_results(frame: &mut Frame, area: Rect, state: &ViewState) {
    let matches = state.matching_players();
    let title = format!("Players ({})", matches.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if matches.is_empty() {
        let paragraph = Paragraph::new(format!(
            "  No players match \"{}\"",
            state.board.search()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = visible_rows(area);
    let offset = list_window_offset(state.picker_cursor, visible);

    let items: Vec<ListItem> = matches
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(i, p)| {
            let style = if i == state.picker_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format_entry(p, state.category),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
