// Keyboard and mouse input handling.
//
// Translates crossterm events into ViewState mutations. Board changes go
// through the ViewState wrappers (select_slot, choose_matching, set_search);
// only quitting is returned to the caller as a UserCommand.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use dugout_core::board::LINEUP_SIZE;

use super::layout::{
    build_layout, build_picker_layout, lineup_row_at, lineup_visible_rows, list_window_offset,
    result_row_at, visible_rows,
};
use super::{UserCommand, ViewState};

/// Page size for PageUp/PageDown in the result list.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should end the session.
/// Everything else is handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.picker_open() {
        handle_picker_mode(key_event, view_state);
        return None;
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.lineup_cursor = view_state.lineup_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.lineup_cursor = (view_state.lineup_cursor + 1).min(LINEUP_SIZE - 1);
        }
        KeyCode::Home => view_state.lineup_cursor = 0,
        KeyCode::End => view_state.lineup_cursor = LINEUP_SIZE - 1,

        // Jump the cursor to the next slot to pick.
        KeyCode::Char('n') => {
            if let Some(first) = view_state.board.first_empty_index() {
                view_state.lineup_cursor = first;
            }
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = view_state.lineup_cursor;
            view_state.select_slot(cursor);
        }

        // Direct slot selection: 1-9.
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            view_state.lineup_cursor = index;
            view_state.select_slot(index);
        }

        KeyCode::Char('c') | KeyCode::Tab => view_state.cycle_category(),

        KeyCode::Char('q') => view_state.confirm_quit = true,

        _ => {}
    }
    None
}

/// Handle key events while in quit confirmation mode.
///
/// `y`/`q` confirm, `n`/`Esc` cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Handle key events while a slot is open.
///
/// Printable characters edit the search text; there is no key that closes
/// the picker without making a pick.
fn handle_picker_mode(key_event: KeyEvent, view_state: &mut ViewState) {
    let result_count = view_state.matching_players().len();
    match key_event.code {
        KeyCode::Esc => view_state.set_search(String::new()),
        KeyCode::Enter => {
            let cursor = view_state.picker_cursor;
            view_state.choose_matching(cursor);
        }
        KeyCode::Backspace => {
            let mut text = view_state.board.search().to_string();
            if text.pop().is_some() {
                view_state.set_search(text);
            }
        }
        KeyCode::Up => move_picker_cursor_up(view_state, 1),
        KeyCode::Down => move_picker_cursor_down(view_state, 1, result_count),
        KeyCode::PageUp => move_picker_cursor_up(view_state, PAGE_SIZE),
        KeyCode::PageDown => move_picker_cursor_down(view_state, PAGE_SIZE, result_count),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = view_state.board.search().to_string();
            text.push(c);
            view_state.set_search(text);
        }
        _ => {}
    }
}

fn move_picker_cursor_up(view_state: &mut ViewState, lines: usize) {
    view_state.picker_cursor = view_state.picker_cursor.saturating_sub(lines);
}

fn move_picker_cursor_down(view_state: &mut ViewState, lines: usize, result_count: usize) {
    let last = result_count.saturating_sub(1);
    view_state.picker_cursor = view_state.picker_cursor.saturating_add(lines).min(last);
}

/// Handle a mouse event against the layout of a `screen`-sized frame.
///
/// A left click on a lineup row tries to open that slot; a left click on a
/// result picks it. The wheel moves the result cursor.
pub fn handle_mouse(mouse: MouseEvent, view_state: &mut ViewState, screen: Rect) {
    if view_state.confirm_quit {
        return;
    }

    let layout = build_layout(screen);
    let picker = build_picker_layout(layout.picker);
    let result_count = view_state.matching_players().len();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let lineup_offset = list_window_offset(
                view_state.lineup_focus(),
                lineup_visible_rows(layout.lineup),
            );
            if let Some(index) =
                lineup_row_at(layout.lineup, lineup_offset, mouse.column, mouse.row)
            {
                if !view_state.picker_open() {
                    view_state.lineup_cursor = index;
                }
                view_state.select_slot(index);
                return;
            }
            if view_state.picker_open() {
                let offset =
                    list_window_offset(view_state.picker_cursor, visible_rows(picker.results));
                if let Some(index) =
                    result_row_at(picker.results, offset, mouse.column, mouse.row)
                {
                    if index < result_count {
                        view_state.choose_matching(index);
                    }
                }
            }
        }
        MouseEventKind::ScrollUp if view_state.picker_open() => {
            move_picker_cursor_up(view_state, 1);
        }
        MouseEventKind::ScrollDown if view_state.picker_open() => {
            move_picker_cursor_down(view_state, 1, result_count);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use dugout_core::category::StatCategory;
    use dugout_core::player::PlayerRecord;
    use dugout_core::pool::PlayerPool;

    /// Helper to create a KeyEvent with no modifiers.
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// Helper to create a KeyEvent with Ctrl modifier.
    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(state: &mut ViewState, text: &str) {
        for c in text.chars() {
            handle_key(key(KeyCode::Char(c)), state);
        }
    }

    fn state() -> ViewState {
        let players = ["Babe Ruth", "Roger Maris", "Mickey Mantle", "Barry Bonds"]
            .iter()
            .map(|n| PlayerRecord::new(*n, "NYY"))
            .collect();
        ViewState::new(PlayerPool::new(players), StatCategory::HomeRuns)
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    // -- Lineup cursor --

    #[test]
    fn arrows_move_lineup_cursor_within_bounds() {
        let mut state = state();
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.lineup_cursor, 0);
        for _ in 0..20 {
            handle_key(key(KeyCode::Down), &mut state);
        }
        assert_eq!(state.lineup_cursor, LINEUP_SIZE - 1);
        handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.lineup_cursor, LINEUP_SIZE - 2);
        handle_key(key(KeyCode::Home), &mut state);
        assert_eq!(state.lineup_cursor, 0);
        handle_key(key(KeyCode::End), &mut state);
        assert_eq!(state.lineup_cursor, LINEUP_SIZE - 1);
    }

    #[test]
    fn n_jumps_to_next_pick() {
        let mut state = state();
        state.select_slot(0);
        state.choose_matching(0);
        state.lineup_cursor = 7;
        handle_key(key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.lineup_cursor, 1);
    }

    // -- Opening slots --

    #[test]
    fn enter_on_first_empty_opens_picker() {
        let mut state = state();
        let result = handle_key(key(KeyCode::Enter), &mut state);
        assert!(result.is_none());
        assert_eq!(state.board.selected(), Some(0));
    }

    #[test]
    fn enter_on_later_slot_is_ignored() {
        let mut state = state();
        state.lineup_cursor = 4;
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(!state.picker_open());
    }

    #[test]
    fn digit_selects_slot_directly() {
        let mut state = state();
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert!(!state.picker_open(), "slot 3 is not the first empty slot");
        assert_eq!(state.lineup_cursor, 2);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.board.selected(), Some(0));
    }

    #[test]
    fn c_and_tab_cycle_category() {
        let mut state = state();
        handle_key(key(KeyCode::Char('c')), &mut state);
        assert_eq!(state.category, StatCategory::BattingAverage);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.category, StatCategory::OpsPlus);
    }

    // -- Picker mode --

    #[test]
    fn typing_updates_search() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        type_text(&mut state, "Mar");
        assert_eq!(state.board.search(), "Mar");
        let names: Vec<&str> = state.matching_players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Roger Maris"]);
    }

    #[test]
    fn picker_mode_captures_command_keys() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        type_text(&mut state, "qc1n");
        assert_eq!(state.board.search(), "qc1n");
        assert!(!state.confirm_quit, "q types into the search box");
        assert_eq!(state.category, StatCategory::HomeRuns);
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        type_text(&mut state, "ru");
        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.board.search(), "r");
        handle_key(key(KeyCode::Backspace), &mut state);
        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.board.search(), "");
    }

    #[test]
    fn esc_clears_search_but_keeps_slot_open() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        type_text(&mut state, "ruth");
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.board.search(), "");
        assert_eq!(state.board.selected(), Some(0));
    }

    #[test]
    fn enter_picks_highlighted_result() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Enter), &mut state);
        let slot = state.board.slot(0).unwrap().player().unwrap();
        assert_eq!(slot.name, "Mickey Mantle");
        assert!(!state.picker_open());
        assert_eq!(state.lineup_cursor, 1);
    }

    #[test]
    fn enter_with_no_results_does_nothing() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        type_text(&mut state, "zzz");
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.picker_open());
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn picker_cursor_clamped_to_results() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        for _ in 0..10 {
            handle_key(key(KeyCode::Down), &mut state);
        }
        assert_eq!(state.picker_cursor, 3);
        handle_key(key(KeyCode::PageUp), &mut state);
        assert_eq!(state.picker_cursor, 0);
        handle_key(key(KeyCode::PageDown), &mut state);
        assert_eq!(state.picker_cursor, 3);
    }

    #[test]
    fn typing_resets_picker_cursor() {
        let mut state = state();
        handle_key(key(KeyCode::Enter), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        type_text(&mut state, "b");
        assert_eq!(state.picker_cursor, 0);
    }

    // -- Quit confirmation --

    #[test]
    fn q_enters_confirm_quit_mode() {
        let mut state = state();
        let result = handle_key(key(KeyCode::Char('q')), &mut state);
        assert!(result.is_none());
        assert!(state.confirm_quit);
    }

    #[test]
    fn confirm_quit_y_sends_quit() {
        let mut state = state();
        state.confirm_quit = true;
        assert_eq!(handle_key(key(KeyCode::Char('y')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn confirm_quit_esc_cancels() {
        let mut state = state();
        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Esc), &mut state).is_none());
        assert!(!state.confirm_quit);
    }

    #[test]
    fn confirm_quit_blocks_other_keys() {
        let mut state = state();
        state.confirm_quit = true;
        handle_key(key(KeyCode::Enter), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        assert!(!state.picker_open());
        assert_eq!(state.lineup_cursor, 0);
        assert!(state.confirm_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut state = state();
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
        handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
        assert_eq!(state.board.search(), "", "Ctrl+C must not type into the search");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = state();
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_key(release, &mut state).is_none());
        assert!(!state.picker_open());
    }

    // -- Mouse --

    #[test]
    fn click_first_lineup_row_opens_picker() {
        let mut state = state();
        let lineup = build_layout(screen()).lineup;
        handle_mouse(click(10, lineup.y + 2), &mut state, screen());
        assert_eq!(state.board.selected(), Some(0));
    }

    #[test]
    fn click_later_lineup_row_is_ignored() {
        let mut state = state();
        let lineup = build_layout(screen()).lineup;
        handle_mouse(click(10, lineup.y + 6), &mut state, screen());
        assert!(!state.picker_open());
        assert_eq!(state.lineup_cursor, 4);
    }

    #[test]
    fn click_result_picks_that_player() {
        let mut state = state();
        state.select_slot(0);
        let layout = build_layout(screen());
        let results = build_picker_layout(layout.picker).results;
        // Second visible entry.
        handle_mouse(click(10, results.y + 2), &mut state, screen());
        let slot = state.board.slot(0).unwrap().player().unwrap();
        assert_eq!(slot.name, "Roger Maris");
    }

    #[test]
    fn click_below_last_result_is_ignored() {
        let mut state = state();
        state.select_slot(0);
        let layout = build_layout(screen());
        let results = build_picker_layout(layout.picker).results;
        handle_mouse(click(10, results.y + 10), &mut state, screen());
        assert!(state.picker_open());
    }

    #[test]
    fn wheel_moves_picker_cursor() {
        let mut state = state();
        state.select_slot(0);
        let scroll = |kind| MouseEvent {
            kind,
            column: 10,
            row: 30,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(scroll(MouseEventKind::ScrollDown), &mut state, screen());
        handle_mouse(scroll(MouseEventKind::ScrollDown), &mut state, screen());
        assert_eq!(state.picker_cursor, 2);
        handle_mouse(scroll(MouseEventKind::ScrollUp), &mut state, screen());
        assert_eq!(state.picker_cursor, 1);
    }

    #[test]
    fn click_on_scrolled_lineup_row_opens_it() {
        // A 14-row terminal squeezes the lineup, so the table scrolls to
        // keep the cursor (slot 8) as the last row drawn.
        let short = Rect::new(0, 0, 100, 14);
        let lineup = build_layout(short).lineup;
        let visible = lineup_visible_rows(lineup) as u16;
        assert!(visible > 0 && (visible as usize) < LINEUP_SIZE);

        let mut state = state();
        for i in 0..7 {
            state.select_slot(i);
            state.choose_matching(0);
        }
        assert_eq!(state.lineup_cursor, 7);

        handle_mouse(click(10, lineup.y + 2 + visible - 1), &mut state, short);
        assert_eq!(state.board.selected(), Some(7));
    }

    #[test]
    fn mouse_ignored_during_quit_prompt() {
        let mut state = state();
        state.confirm_quit = true;
        let lineup = build_layout(screen()).lineup;
        handle_mouse(click(10, lineup.y + 2), &mut state, screen());
        assert!(!state.picker_open());
    }
}
