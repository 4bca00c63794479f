// The read-only pool of draftable players.

use crate::player::PlayerRecord;

/// Every player available to the picker, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<PlayerRecord>,
}

impl PlayerPool {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        PlayerPool { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players whose name contains `query`, ignoring case.
    ///
    /// Keeps dataset order and applies no limit. An empty query returns the
    /// whole pool.
    pub fn filter(&self, query: &str) -> Vec<&PlayerRecord> {
        let query_lower = query.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.name_matches(&query_lower))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
