//! Cross-fight fold.
//!
//! Per-fight results are commutative under this merge (sums, element-wise
//! burst maxima), so fights are scored in parallel and folded afterward;
//! high scores merge by replaying `record` calls.

use hashbrown::HashMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;
use warclaw_types::{PlayerKey, ScoringConfig};

use super::{BuffReport, FightScore, PlayerScore, score_fight};
use crate::error::ScoringError;
use crate::fight::Fight;
use crate::high_scores::HighScoreTracker;
use crate::windows::WindowStats;

/// A fight that failed validation; the rest of the batch still scored.
#[derive(Debug)]
pub struct BatchWarning {
    pub fight_num: u32,
    pub error: ScoringError,
}

/// One player's running totals across fights.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerTotals {
    pub key: PlayerKey,
    pub fights: u32,
    pub fight_secs: i64,
    pub combat_time_secs: i64,
    pub degraded_fights: u32,
    pub windows: WindowStats,
    pub stacking: Vec<BuffReport>,
}

impl PlayerTotals {
    fn new(key: PlayerKey) -> Self {
        Self {
            key,
            fights: 0,
            fight_secs: 0,
            combat_time_secs: 0,
            degraded_fights: 0,
            windows: WindowStats::default(),
            stacking: Vec::new(),
        }
    }

    fn absorb(&mut self, score: &PlayerScore) {
        self.fights += 1;
        self.fight_secs += score.fight_secs;
        self.combat_time_secs += score.combat_time_secs;
        if score.degraded_timeline {
            self.degraded_fights += 1;
        }
        self.windows.absorb(&score.windows);
        for report in &score.stacking {
            match self.stacking.iter_mut().find(|r| r.buff == report.buff) {
                Some(mine) => mine.stacking.absorb(&report.stacking),
                None => self.stacking.push(report.clone()),
            }
        }
    }
}

/// Folded batch result.
#[derive(Debug, Default)]
pub struct Batch {
    pub players: HashMap<PlayerKey, PlayerTotals>,
    pub high_scores: HighScoreTracker,
    pub warnings: Vec<BatchWarning>,
}

impl Batch {
    /// Fold one fight's score into the running totals.
    pub fn absorb(&mut self, score: FightScore) {
        self.high_scores.merge(&score.high_scores);
        for player in score.players {
            self.players
                .entry(player.key.clone())
                .or_insert_with(|| PlayerTotals::new(player.key.clone()))
                .absorb(&player);
        }
    }
}

/// Score a batch of fights in parallel and fold the results.
///
/// Fight numbers are 1-based positions in the slice. A fight that fails
/// validation is logged and recorded as a warning; it never aborts the rest.
pub fn score_fights(fights: &[Fight], config: &ScoringConfig) -> Batch {
    let results: Vec<(u32, Result<FightScore, ScoringError>)> = fights
        .par_iter()
        .enumerate()
        .map(|(i, fight)| {
            let fight_num = i as u32 + 1;
            (fight_num, score_fight(fight, fight_num, config))
        })
        .collect();

    let mut batch = Batch::default();
    for (fight_num, result) in results {
        match result {
            Ok(score) => batch.absorb(score),
            Err(error) => {
                warn!(fight = fight_num, %error, "fight skipped");
                batch.warnings.push(BatchWarning { fight_num, error });
            }
        }
    }
    batch
}
