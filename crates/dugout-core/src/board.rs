// Lineup state container: the nine slots, the open slot and the search text.
//
// All mutation goes through `select_slot`, `choose_player` and
// `update_search`. Invalid calls are silent no-ops; the return values only
// report whether anything changed.

use tracing::{debug, info};

use crate::player::PlayerRecord;
use crate::pool::PlayerPool;

/// Number of lineup slots on the board.
pub const LINEUP_SIZE: usize = 9;

// ---------------------------------------------------------------------------
// LineupSlot
// ---------------------------------------------------------------------------

/// One position in the batting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineupSlot {
    player: Option<PlayerRecord>,
}

impl LineupSlot {
    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    pub fn player(&self) -> Option<&PlayerRecord> {
        self.player.as_ref()
    }
}

/// How a lineup row should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Holds a player. Never interactive again.
    Filled,
    /// The first empty slot; the only one that can be opened.
    NextToPick,
    /// The first empty slot, currently open in the picker.
    Selected,
    /// Empty but behind the first empty slot.
    Disabled,
}

// ---------------------------------------------------------------------------
// DraftBoard
// ---------------------------------------------------------------------------

/// The draft board's local state.
#[derive(Debug, Clone, Default)]
pub struct DraftBoard {
    slots: [LineupSlot; LINEUP_SIZE],
    selected: Option<usize>,
    search: String,
}

impl DraftBoard {
    /// A board with every slot empty, nothing selected and no search text.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[LineupSlot; LINEUP_SIZE] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&LineupSlot> {
        self.slots.get(index)
    }

    /// Index of the slot currently open for picking, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Lowest-index empty slot, or `None` once the lineup is full.
    pub fn first_empty_index(&self) -> Option<usize> {
        self.slots.iter().position(LineupSlot::is_empty)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.first_empty_index().is_none()
    }

    /// Presentation state for row `index`. Out-of-range indices are `Disabled`.
    pub fn row_state(&self, index: usize) -> RowState {
        match self.slots.get(index) {
            Some(slot) if !slot.is_empty() => RowState::Filled,
            Some(_) if self.selected == Some(index) => RowState::Selected,
            Some(_) if self.first_empty_index() == Some(index) => RowState::NextToPick,
            _ => RowState::Disabled,
        }
    }

    /// Open slot `index` for picking.
    ///
    /// Only the first empty slot can be opened; any other index is ignored.
    /// Returns `true` when `index` is (now) the selected slot.
    pub fn select_slot(&mut self, index: usize) -> bool {
        match self.first_empty_index() {
            Some(first) if first == index => {
                if self.selected != Some(index) {
                    info!("Slot {} opened for picking", index + 1);
                }
                self.selected = Some(index);
                true
            }
            first => {
                debug!(
                    "Ignored select of slot {} (first empty: {:?})",
                    index + 1,
                    first.map(|i| i + 1)
                );
                false
            }
        }
    }

    /// Put a copy of `record` into the selected slot.
    ///
    /// Clears the selection and the search text. Does nothing when no slot is
    /// selected. Returns the index that was filled.
    pub fn choose_player(&mut self, record: &PlayerRecord) -> Option<usize> {
        let Some(index) = self.selected.take() else {
            debug!("Ignored pick of {}: no slot selected", record.name);
            return None;
        };
        debug_assert!(self.slots[index].is_empty(), "selected slot must be empty");

        self.slots[index].player = Some(record.clone());
        self.search.clear();
        info!(
            "Slot {} filled with {} ({})",
            index + 1,
            record.name,
            record.team
        );
        Some(index)
    }

    /// Replace the search text verbatim. Returns `true` if it changed.
    pub fn update_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search {
            return false;
        }
        self.search = text;
        true
    }

    /// Players from `pool` matching the current search text, in pool order.
    pub fn matching_players<'a>(&self, pool: &'a PlayerPool) -> Vec<&'a PlayerRecord> {
        pool.filter(&self.search)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
