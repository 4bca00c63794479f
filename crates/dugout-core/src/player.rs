// Player records as they appear in the static dataset.

/// One player from the dataset.
///
/// Records are loaded once and never mutated. Lineup slots hold their own
/// copies, so a pick never aliases the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Display name. Never blank once loaded.
    pub name: String,
    /// Team abbreviation (e.g. "NYY"). May be blank.
    pub team: String,
    pub home_runs: Option<u32>,
    pub batting_average: Option<f64>,
    /// OPS+ is park/league adjusted and always reported as a whole number.
    pub ops_plus: Option<i32>,
    pub war: Option<f64>,
    pub on_base: Option<f64>,
}

impl PlayerRecord {
    /// Create a record with a name and team and no stats.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        PlayerRecord {
            name: name.into(),
            team: team.into(),
            home_runs: None,
            batting_average: None,
            ops_plus: None,
            war: None,
            on_base: None,
        }
    }

    /// Case-insensitive substring match on the player's name.
    ///
    /// `needle_lower` must already be lowercased; callers filtering a whole
    /// pool lowercase the query once instead of per record.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
