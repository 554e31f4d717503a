//! Fight scoring driver
//!
//! `score_fight` runs the whole engine for one fight: timeline
//! reconstruction, window aggregation, stack attribution, and high-score
//! recording, returning an immutable `FightScore`. `score_fights` scores a
//! batch in parallel and folds the results; a malformed fight becomes a
//! labeled warning, never an abort.

mod fold;


pub use fold::{Batch, BatchWarning, PlayerTotals, score_fights};

use serde::Serialize;
use warclaw_types::{BuffId, PlayerKey, ScoringConfig};

use crate::combat_time::combat_breakpoints;
use crate::error::ScoringError;
use crate::fight::{Fight, damage_deltas};
use crate::game_data::boon_info;
use crate::high_scores::{HighScoreTracker, ScoreKey};
use crate::intervals::{TimeInterval, clip_spans, split_states};
use crate::stacking::{BuffStacking, attribute_stack_damage};
use crate::windows::{self, PlayerWindowCtx, WindowStats};

/// Stack attribution for one boon on one player.
#[derive(Debug, Clone, Serialize)]
pub struct BuffReport {
    pub buff: BuffId,
    pub name: &'static str,
    pub stacking: BuffStacking,
}

/// Everything the engine derives for one player in one fight.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerScore {
    pub key: PlayerKey,
    pub fight_secs: i64,
    pub combat_time_secs: i64,
    pub combat_intervals: Vec<TimeInterval>,
    /// The timeline came from reported active time, not replay events.
    pub degraded_timeline: bool,
    pub windows: WindowStats,
    pub stacking: Vec<BuffReport>,
}

/// Immutable result of scoring one fight.
#[derive(Debug, Clone)]
pub struct FightScore {
    pub fight_num: u32,
    pub fight_secs: i64,
    pub players: Vec<PlayerScore>,
    pub high_scores: HighScoreTracker,
}

fn validate(fight: &Fight) -> Result<(), ScoringError> {
    if fight.players.is_empty() {
        return Err(ScoringError::NoPlayers);
    }
    let tick_count = fight.tick_count();
    for player in &fight.players {
        if player.damage_1s.len() != tick_count {
            return Err(ScoringError::SeriesLength {
                player: player.key.clone(),
                series: "damage_1s",
                expected: tick_count,
                actual: player.damage_1s.len(),
            });
        }
        if player.power_damage_1s.len() != tick_count {
            return Err(ScoringError::SeriesLength {
                player: player.key.clone(),
                series: "power_damage_1s",
                expected: tick_count,
                actual: player.power_damage_1s.len(),
            });
        }
        if player.target_damage_1s.len() != fight.targets.len() {
            return Err(ScoringError::TargetSeries {
                player: player.key.clone(),
                expected: fight.targets.len(),
                actual: player.target_damage_1s.len(),
            });
        }
        for series in &player.target_damage_1s {
            if series.len() != tick_count {
                return Err(ScoringError::SeriesLength {
                    player: player.key.clone(),
                    series: "target_damage_1s",
                    expected: tick_count,
                    actual: series.len(),
                });
            }
        }
    }
    Ok(())
}

/// Per-tick cumulative damage to enemy players only.
fn enemy_damage_series(fight: &Fight, player_idx: usize, tick_count: usize) -> Vec<i64> {
    let mut series = vec![0; tick_count];
    let player = &fight.players[player_idx];
    for (t_idx, target) in fight.targets.iter().enumerate() {
        if !target.enemy_player {
            continue;
        }
        for (slot, &value) in series.iter_mut().zip(player.target_damage_1s[t_idx].iter()) {
            *slot += value;
        }
    }
    series
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one fight.
///
/// `fight_num` labels high-score entries and batch warnings; it is not used
/// in any computation.
pub fn score_fight(
    fight: &Fight,
    fight_num: u32,
    config: &ScoringConfig,
) -> Result<FightScore, ScoringError> {
    validate(fight)?;

    let tick_count = fight.tick_count();
    let fight_secs = fight.fight_secs();

    let mut timelines = Vec::with_capacity(fight.players.len());
    let mut ctxs = Vec::with_capacity(fight.players.len());
    for (p, player) in fight.players.iter().enumerate() {
        let timeline = combat_breakpoints(player, tick_count, fight.duration_ms);
        let in_combat = !player.not_in_squad && timeline.combat_time_secs() > 0;
        let scored = in_combat && !config.is_blacklisted(&player.key.account);
        ctxs.push(PlayerWindowCtx {
            series: enemy_damage_series(fight, p, tick_count),
            in_combat,
            scored,
        });
        timelines.push(timeline);
    }

    let window_stats = windows::aggregate(fight, &ctxs, fight_secs);

    let mut high_scores = HighScoreTracker::new();
    let mut players = Vec::new();
    for (p, player) in fight.players.iter().enumerate() {
        if !ctxs[p].scored {
            continue;
        }
        let timeline = &timelines[p];
        let stats = &window_stats[p];

        let deltas = damage_deltas(&ctxs[p].series);
        let mut stacking = Vec::new();
        for buff_states in &player.buff_states {
            let Some(boon) = boon_info(buff_states.buff) else {
                continue;
            };
            let spans = split_states(&buff_states.states, fight_secs * 1000);
            let clipped = clip_spans(&spans, &timeline.intervals);
            stacking.push(BuffReport {
                buff: buff_states.buff,
                name: boon.name,
                stacking: attribute_stack_damage(&clipped, &deltas, boon),
            });
        }

        let score_key = ScoreKey::new(player.key.clone(), fight_num);
        if fight_secs > 0 {
            high_scores.record(
                "fight_dps",
                score_key.clone(),
                round2(stats.damage_total as f64 / fight_secs as f64),
            );
        }
        let burst_1s = damage_deltas(&player.damage_1s)
            .into_iter()
            .max()
            .unwrap_or(0);
        high_scores.record("burst_damage_1s", score_key, burst_1s as f64);

        players.push(PlayerScore {
            key: player.key.clone(),
            fight_secs,
            combat_time_secs: timeline.combat_time_secs(),
            combat_intervals: timeline.intervals.clone(),
            degraded_timeline: timeline.degraded,
            windows: stats.clone(),
            stacking,
        });
    }

    Ok(FightScore {
        fight_num,
        fight_secs,
        players,
        high_scores,
    })
}
