//! Per-fight input model
//!
//! These types carry one fight's worth of already-parsed data from the
//! ingestion layer into the engine. All dense series are per-second
//! ("per-tick") and cumulative unless stated otherwise; all timestamps are
//! milliseconds from fight start.

use warclaw_types::{BuffId, PlayerKey};

/// One down or death occurrence from the combat replay.
///
/// `paired_ms` is the opaque value the log stores next to the event; a death
/// is matched to a down by `down.paired_ms == death.at_ms`, never by index or
/// proximity. That is the upstream pairing rule, preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayEvent {
    pub at_ms: i64,
    pub paired_ms: i64,
}

impl ReplayEvent {
    pub fn new(at_ms: i64, paired_ms: i64) -> Self {
        Self { at_ms, paired_ms }
    }
}

/// Down and death events for one entity, in log order.
///
/// The engine must not reorder these: pairing walks them exactly as the
/// source emitted them.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    pub downs: Vec<ReplayEvent>,
    pub deaths: Vec<ReplayEvent>,
}

/// Sparse stack-change events for one buff: `(timestamp_ms, stacks)`.
#[derive(Debug, Clone)]
pub struct BuffStates {
    pub buff: BuffId,
    pub states: Vec<(i64, u32)>,
}

/// One squad player's per-fight data.
#[derive(Debug, Clone)]
pub struct Player {
    pub key: PlayerKey,
    /// Present in the log but outside the squad; excluded from every stat.
    pub not_in_squad: bool,
    /// Active time the log reports directly; only used when replay death
    /// data is missing and the combat timeline degrades.
    pub reported_active_time_ms: i64,
    /// Sparse health samples `(timestamp_ms, percent 0..=100)`.
    pub health_percents: Vec<(i64, f64)>,
    /// Cumulative damage to all targets, one value per tick.
    pub damage_1s: Vec<i64>,
    /// Cumulative power-only damage, one value per tick. Drives combat-start
    /// detection: condition ticks can continue after disengaging.
    pub power_damage_1s: Vec<i64>,
    /// Cumulative damage per fight target, indexed as `Fight::targets`.
    pub target_damage_1s: Vec<Vec<i64>>,
    /// Down/death replay data; `None` degrades the combat timeline to the
    /// reported active time.
    pub replay: Option<Replay>,
    /// Stack-change events per tracked buff.
    pub buff_states: Vec<BuffStates>,
}

/// One enemy entity the squad fought.
#[derive(Debug, Clone, Default)]
pub struct Target {
    /// True for enemy players; NPC targets are ignored by the window stats.
    pub enemy_player: bool,
    pub replay: Option<Replay>,
}

/// One fight, fully materialized.
#[derive(Debug, Clone, Default)]
pub struct Fight {
    pub duration_ms: i64,
    pub players: Vec<Player>,
    pub targets: Vec<Target>,
}

impl Fight {
    /// Number of whole-second ticks every dense series must have.
    pub fn tick_count(&self) -> usize {
        (self.duration_ms / 1000).max(0) as usize
    }

    /// Fight length in whole seconds, rounded to nearest.
    pub fn fight_secs(&self) -> i64 {
        (self.duration_ms as f64 / 1000.0).round() as i64
    }
}

/// Convert a cumulative series into per-tick deltas.
///
/// Index 0 keeps the first cumulative value, matching how the upstream
/// scripts seed the delta array.
pub fn damage_deltas(series: &[i64]) -> Vec<i64> {
    let mut deltas = Vec::with_capacity(series.len());
    if let Some(&first) = series.first() {
        deltas.push(first);
        for window in series.windows(2) {
            deltas.push(window[1] - window[0]);
        }
    }
    deltas
}
