// Stat categories and how each one is labelled and rendered.
//
// The mapping is a fixed table indexed by category, so adding a category
// means adding one enum variant and one table row.

use std::fmt;

use serde::Deserialize;

use crate::player::PlayerRecord;

/// Placeholder rendered when a record has no value for the active stat.
pub const MISSING_STAT: &str = "-";

/// The single statistic displayed across the board.
///
/// Deserialized from the short tags used in config files
/// (`HR`, `BA`, `OPS+`, `WAR`, `OBP`); any other tag is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum StatCategory {
    #[serde(rename = "HR")]
    HomeRuns,
    #[serde(rename = "BA")]
    BattingAverage,
    #[serde(rename = "OPS+")]
    OpsPlus,
    #[serde(rename = "WAR")]
    War,
    #[serde(rename = "OBP")]
    OnBase,
}

/// Every category, in display order.
pub const ALL_CATEGORIES: [StatCategory; 5] = [
    StatCategory::HomeRuns,
    StatCategory::BattingAverage,
    StatCategory::OpsPlus,
    StatCategory::War,
    StatCategory::OnBase,
];

/// Label and value extractor for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFormat {
    pub category: StatCategory,
    /// Column header and short tag.
    pub label: &'static str,
    /// Returns the rendered value, or `None` when the record lacks the stat.
    pub extract: fn(&PlayerRecord) -> Option<String>,
}

/// Lookup table, one row per `StatCategory`, in declaration order.
const CATEGORY_TABLE: [CategoryFormat; 5] = [
    CategoryFormat {
        category: StatCategory::HomeRuns,
        label: "HR",
        extract: home_runs,
    },
    CategoryFormat {
        category: StatCategory::BattingAverage,
        label: "BA",
        extract: batting_average,
    },
    CategoryFormat {
        category: StatCategory::OpsPlus,
        label: "OPS+",
        extract: ops_plus,
    },
    CategoryFormat {
        category: StatCategory::War,
        label: "WAR",
        extract: war,
    },
    CategoryFormat {
        category: StatCategory::OnBase,
        label: "OBP",
        extract: on_base,
    },
];

fn home_runs(p: &PlayerRecord) -> Option<String> {
    p.home_runs.map(|v| v.to_string())
}

fn batting_average(p: &PlayerRecord) -> Option<String> {
    p.batting_average.map(|v| format!("{:.3}", v))
}

fn ops_plus(p: &PlayerRecord) -> Option<String> {
    p.ops_plus.map(|v| v.to_string())
}

// WAR and OBP print in shortest form ("8.3", "0.39"), not padded.
fn war(p: &PlayerRecord) -> Option<String> {
    p.war.map(|v| v.to_string())
}

fn on_base(p: &PlayerRecord) -> Option<String> {
    p.on_base.map(|v| v.to_string())
}

impl StatCategory {
    /// The formatter row for this category.
    pub fn format(self) -> &'static CategoryFormat {
        &CATEGORY_TABLE[self as usize]
    }

    /// Short label used for the column header (e.g. "OPS+").
    pub fn label(self) -> &'static str {
        self.format().label
    }

    /// Render this category's value for `player`, or `-` when absent.
    pub fn display_value(self, player: &PlayerRecord) -> String {
        (self.format().extract)(player).unwrap_or_else(|| MISSING_STAT.to_string())
    }

    /// The next category in display order, wrapping after the last.
    pub fn next(self) -> Self {
        ALL_CATEGORIES[(self as usize + 1) % ALL_CATEGORIES.len()]
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
