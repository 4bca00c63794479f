// Lineup table widget: the nine draft slots in pick order.
//
// Columns: #, PLAYER, TEAM, <category label>. Empty slots show only their
// number. Row colors follow RowState: the next slot to pick is yellow, the
// open slot is green, later empty slots are dimmed.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState};
use ratatui::Frame;

use dugout_core::board::{LineupSlot, RowState, LINEUP_SIZE};
use dugout_core::category::StatCategory;

use crate::tui::layout::{lineup_visible_rows, list_window_offset};
use crate::tui::ViewState;

/// Plain-text contents of one lineup row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub number: String,
    pub name: String,
    pub team: String,
    pub stat: String,
}

/// Cell text for slot `index`. Unfilled slots are blank apart from the number.
pub fn row_cells(index: usize, slot: &LineupSlot, category: StatCategory) -> RowCells {
    let number = (index + 1).to_string();
    match slot.player() {
        Some(p) => RowCells {
            number,
            name: p.name.clone(),
            team: p.team.clone(),
            stat: category.display_value(p),
        },
        None => RowCells {
            number,
            name: String::new(),
            team: String::new(),
            stat: String::new(),
        },
    }
}

/// Row style for each presentation state.
pub fn row_style(row_state: RowState) -> Style {
    match row_state {
        RowState::Filled => Style::default().fg(Color::White),
        RowState::NextToPick => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RowState::Selected => Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        RowState::Disabled => Style::default().fg(Color::DarkGray),
    }
}

/// Render the lineup table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("PLAYER"),
        Cell::from(Line::from("TEAM").alignment(Alignment::Right)),
        Cell::from(Line::from(state.category.label()).alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let rows: Vec<Row> = state
        .board
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let cells = row_cells(i, slot, state.category);
            Row::new(vec![
                Cell::from(cells.number),
                Cell::from(Span::styled(
                    cells.name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(Line::from(cells.team).alignment(Alignment::Right)),
                Cell::from(Line::from(cells.stat).alignment(Alignment::Right)),
            ])
            .style(row_style(state.board.row_state(i)))
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(16),
        Constraint::Length(6),
        Constraint::Length(7),
    ];

    let title = format!(
        "Lineup ({}/{})",
        state.board.filled_count(),
        LINEUP_SIZE
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always);

    // The keyboard cursor is only meaningful while choosing a slot.
    let cursor = if state.picker_open() || state.confirm_quit {
        None
    } else {
        Some(state.lineup_cursor)
    };
    // Scroll offset shared with mouse hit-testing.
    let offset = list_window_offset(state.lineup_focus(), lineup_visible_rows(area));
    let mut table_state = TableState::default()
        .with_offset(offset)
        .with_selected(cursor);

    frame.render_stateful_widget(table, area, &mut table_state);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use dugout_core::player::PlayerRecord;
    use dugout_core::pool::PlayerPool;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn maris() -> PlayerRecord {
        PlayerRecord {
            home_runs: Some(61),
            batting_average: Some(0.269),
            ..PlayerRecord::new("Roger Maris", "NYY")
        }
    }

    fn state() -> ViewState {
        ViewState::new(PlayerPool::new(vec![maris()]), StatCategory::HomeRuns)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &ViewState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state))
            .unwrap();
        terminal
    }

    #[test]
    fn row_cells_empty_slot() {
        let cells = row_cells(4, &LineupSlot::default(), StatCategory::HomeRuns);
        assert_eq!(
            cells,
            RowCells {
                number: "5".into(),
                name: String::new(),
                team: String::new(),
                stat: String::new(),
            }
        );
    }

    #[test]
    fn row_cells_filled_slot_uses_category() {
        let mut state = state();
        state.select_slot(0);
        state.choose_matching(0);
        let slot = state.board.slot(0).unwrap();

        let hr = row_cells(0, slot, StatCategory::HomeRuns);
        assert_eq!(hr.number, "1");
        assert_eq!(hr.name, "Roger Maris");
        assert_eq!(hr.team, "NYY");
        assert_eq!(hr.stat, "61");

        assert_eq!(row_cells(0, slot, StatCategory::BattingAverage).stat, "0.269");
        assert_eq!(row_cells(0, slot, StatCategory::War).stat, "-");
    }

    #[test]
    fn row_styles_are_distinct() {
        let styles = [
            row_style(RowState::Filled),
            row_style(RowState::NextToPick),
            row_style(RowState::Selected),
            row_style(RowState::Disabled),
        ];
        for i in 0..styles.len() {
            for j in (i + 1)..styles.len() {
                assert_ne!(styles[i], styles[j], "styles {} and {} collide", i, j);
            }
        }
        assert_eq!(row_style(RowState::Selected).bg, Some(Color::LightGreen));
        assert_eq!(row_style(RowState::Disabled).fg, Some(Color::DarkGray));
    }

    #[test]
    fn render_shows_header_with_category_label() {
        let mut state = state();
        state.category = StatCategory::OpsPlus;
        let text = buffer_text(&draw(&state));
        assert!(text.contains("PLAYER"));
        assert!(text.contains("TEAM"));
        assert!(text.contains("OPS+"));
        assert!(text.contains("Lineup (0/9)"));
    }

    #[test]
    fn render_shows_filled_player() {
        let mut state = state();
        state.select_slot(0);
        state.choose_matching(0);
        let text = buffer_text(&draw(&state));
        assert!(text.contains("Roger Maris"));
        assert!(text.contains("NYY"));
        assert!(text.contains("61"));
        assert!(text.contains("Lineup (1/9)"));
    }

    #[test]
    fn render_shows_all_slot_numbers() {
        let text = buffer_text(&draw(&state()));
        let rows: Vec<&str> = text.lines().collect();
        // Border, header, then slots 1-9.
        for (i, line) in rows[2..11].iter().enumerate() {
            assert!(
                line.contains(&(i + 1).to_string()),
                "row {} should show slot number: {:?}",
                i,
                line
            );
        }
    }

    #[test]
    fn render_cursor_hidden_while_picking() {
        let mut state = state();
        let text = buffer_text(&draw(&state));
        assert!(text.contains('▶'));
        state.select_slot(0);
        let text = buffer_text(&draw(&state));
        assert!(!text.contains('▶'));
    }
}
