// Help bar widget: keyboard hints for the current input mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Hint line for whatever the keyboard currently drives.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        " y:Quit | n/Esc:Keep drafting"
    } else if state.picker_open() {
        " Type:Search | Up/Down:Move | Enter:Pick | Esc:Clear | Click:Pick"
    } else if state.board.is_complete() {
        " Lineup complete | c/Tab:Category | q:Quit"
    } else {
        " Up/Down:Move | Enter:Open slot | n:Next open | 1-9:Slot | c/Tab:Category | q:Quit"
    }
}

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
