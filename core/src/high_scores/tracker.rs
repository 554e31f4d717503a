//! Bounded leaderboard maintenance.

use hashbrown::HashMap;
use serde::Serialize;
use warclaw_types::PlayerKey;

/// Entries kept per category.
pub const HIGH_SCORE_CAPACITY: usize = 5;

/// Who earned a score, and in which fight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreKey {
    pub player: PlayerKey,
    pub fight_num: u32,
}

impl ScoreKey {
    pub fn new(player: PlayerKey, fight_num: u32) -> Self {
        Self { player, fight_num }
    }
}

/// Flattened view of one tracked score.
#[derive(Debug, Clone, Serialize)]
pub struct HighScoreEntry {
    pub category: String,
    pub key: ScoreKey,
    pub value: f64,
}

/// Top-N tables, one per category.
#[derive(Debug, Clone, Default)]
pub struct HighScoreTracker {
    tables: HashMap<String, HashMap<ScoreKey, f64>>,
}

impl HighScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score.
    ///
    /// An existing key is overwritten only by a strictly greater value. A
    /// new key fills free capacity unconditionally; at capacity it must
    /// strictly beat the category's lowest value, which is then evicted.
    /// A tie with the lowest value keeps the incumbent.
    pub fn record(&mut self, category: &str, key: ScoreKey, value: f64) {
        let table = self.tables.entry(category.to_string()).or_default();

        if let Some(current) = table.get_mut(&key) {
            if value > *current {
                *current = value;
            }
            return;
        }

        if table.len() < HIGH_SCORE_CAPACITY {
            table.insert(key, value);
            return;
        }

        let lowest = table
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, v)| (k.clone(), *v));
        if let Some((lowest_key, lowest_value)) = lowest
            && value > lowest_value
        {
            table.remove(&lowest_key);
            table.insert(key, value);
        }
    }

    /// The table for one category, if anything was recorded.
    pub fn category(&self, name: &str) -> Option<&HashMap<ScoreKey, f64>> {
        self.tables.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Flatten every table for the report layer.
    pub fn entries(&self) -> Vec<HighScoreEntry> {
        let mut entries: Vec<HighScoreEntry> = self
            .tables
            .iter()
            .flat_map(|(category, table)| {
                table.iter().map(|(key, &value)| HighScoreEntry {
                    category: category.clone(),
                    key: key.clone(),
                    value,
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(b.value.total_cmp(&a.value))
        });
        entries
    }

    /// Fold another tracker in by replaying its entries; bounded-top-N
    /// semantics hold no matter the merge order.
    pub fn merge(&mut self, other: &HighScoreTracker) {
        for (category, table) in &other.tables {
            for (key, &value) in table {
                self.record(category, key.clone(), value);
            }
        }
    }
}
