// TUI draft board: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` wrapping the draft board plus the bits of
// presentation state the board doesn't care about (cursors, the quit
// prompt). Key and mouse events mutate it in place; a ~30 fps tick redraws.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream};
use crossterm::execute;
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{info, warn};

use dugout_core::board::{DraftBoard, LINEUP_SIZE};
use dugout_core::category::StatCategory;
use dugout_core::player::PlayerRecord;
use dugout_core::pool::PlayerPool;

use layout::build_layout;

// ---------------------------------------------------------------------------
// UserCommand
// ---------------------------------------------------------------------------

/// Requests that leave the TUI's local state handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Everything the renderer reads.
///
/// Board contents change only through `select_slot`, `choose_matching` and
/// `set_search`, which forward to the board's own operations and keep the
/// cursors consistent with the result.
pub struct ViewState {
    /// Lineup, open slot and search text.
    pub board: DraftBoard,
    /// Read-only player dataset.
    pub pool: PlayerPool,
    /// Stat shown in the table and picker.
    pub category: StatCategory,
    /// Keyboard cursor over lineup rows (0-based).
    pub lineup_cursor: usize,
    /// Highlighted entry within the current search results.
    pub picker_cursor: usize,
    /// Whether the quit confirmation overlay is showing.
    pub confirm_quit: bool,
}

impl ViewState {
    pub fn new(pool: PlayerPool, category: StatCategory) -> Self {
        ViewState {
            board: DraftBoard::new(),
            pool,
            category,
            lineup_cursor: 0,
            picker_cursor: 0,
            confirm_quit: false,
        }
    }

    /// Whether a slot is open and the picker panel is showing.
    pub fn picker_open(&self) -> bool {
        self.board.selected().is_some()
    }

    /// Lineup row the table keeps in view: the open slot, else the cursor.
    pub fn lineup_focus(&self) -> usize {
        self.board.selected().unwrap_or(self.lineup_cursor)
    }

    /// Pool entries matching the current search text.
    pub fn matching_players(&self) -> Vec<&PlayerRecord> {
        self.board.matching_players(&self.pool)
    }

    /// Try to open slot `index`. The board decides whether it is eligible.
    pub fn select_slot(&mut self, index: usize) {
        let already_open = self.board.selected() == Some(index);
        if self.board.select_slot(index) && !already_open {
            self.picker_cursor = 0;
        }
    }

    /// Pick the `index`-th entry of the current search results.
    pub fn choose_matching(&mut self, index: usize) {
        let Some(player) = self.matching_players().get(index).map(|p| (*p).clone()) else {
            return;
        };
        if self.board.choose_player(&player).is_some() {
            self.picker_cursor = 0;
            // Park the cursor on the next slot to pick so Enter continues the draft.
            self.lineup_cursor = self
                .board
                .first_empty_index()
                .unwrap_or(LINEUP_SIZE - 1);
        }
    }

    /// Replace the search text and return the picker cursor to the top.
    pub fn set_search(&mut self, text: String) {
        if self.board.update_search(text) {
            self.picker_cursor = 0;
        }
    }

    /// Show the next stat category.
    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
        info!("Displaying {}", self.category);
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete draft board frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::lineup::render(frame, layout.lineup, state);
    widgets::picker::render(frame, layout.picker, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen, mouse capture).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: terminal events and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(mut view_state: ViewState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Screen area from the most recent draw; mouse hit-testing uses it.
    let mut screen: Rect = terminal
        .draw(|frame| render_frame(frame, &view_state))?
        .area;

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(UserCommand::Quit) =
                            input::handle_key(key_event, &mut view_state)
                        {
                            info!("Quit requested");
                            break;
                        }
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        input::handle_mouse(mouse_event, &mut view_state, screen);
                    }
                    Some(Ok(_)) => {
                        // Resize, focus and paste events need no state change;
                        // the next tick redraws at the new size.
                    }
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                screen = terminal.draw(|frame| render_frame(frame, &view_state))?.area;
            }
        }
    }

    info!(
        "Leaving draft board with {}/{} slots filled",
        view_state.board.filled_count(),
        LINEUP_SIZE
    );

    execute!(std::io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
