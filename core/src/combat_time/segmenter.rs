//! Combat segment detection from health, damage, and replay events.

use tracing::warn;

use crate::fight::Player;
use crate::intervals::{TimeInterval, sum_durations};

/// Reconstructed combat-active windows for one player.
///
/// Intervals are half-open, ascending, non-overlapping, and bounded within
/// `[0, duration_ms]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatTimeline {
    pub intervals: Vec<TimeInterval>,
    /// True when replay death data was missing and the timeline fell back to
    /// the reported active time. Precision degradation, not a failure.
    pub degraded: bool,
}

impl CombatTimeline {
    pub fn combat_time_ms(&self) -> i64 {
        sum_durations(&self.intervals)
    }

    /// Combat time rounded to whole seconds.
    pub fn combat_time_secs(&self) -> i64 {
        (self.combat_time_ms() as f64 / 1000.0).round() as i64
    }
}

/// Detect combat start at or after `from_ms`.
///
/// Two independent detections, earliest wins:
/// - damage taken: the first health sample at or after `from_ms` strictly
///   below its predecessor (running baseline starts at 100)
/// - damage dealt: the first tick from `ceil(from_ms / 1000)` whose
///   cumulative power damage differs from the previous tick
///
/// Returns `None` when neither fires. Without any health samples the player
/// never registered in the replay, so no detection is attempted at all.
fn detect_start(player: &Player, from_ms: i64) -> Option<i64> {
    if player.health_percents.is_empty() {
        return None;
    }

    let mut start: Option<i64> = None;
    let mut last_health = 100.0;
    for &(at_ms, percent) in &player.health_percents {
        if at_ms < from_ms {
            last_health = percent;
            continue;
        }
        if percent < last_health {
            start = Some(at_ms);
            break;
        }
        last_health = percent;
    }

    let first_tick = (from_ms + 999).div_euclid(1000).max(0) as usize;
    for i in first_tick..player.power_damage_1s.len() {
        if i == 0 {
            continue;
        }
        if player.power_damage_1s[i] != player.power_damage_1s[i - 1] {
            let dealt = i as i64 * 1000;
            start = Some(start.map_or(dealt, |s| s.min(dealt)));
            break;
        }
    }

    start
}

/// Reconstruct the combat timeline for one player.
///
/// Each death event (walked in log order) that pairs with a down event
/// closes the currently open segment at the death timestamp; detection then
/// restarts one second after the death. A final segment runs from the last
/// detected start to `tick_count * 1000`.
///
/// Without replay data the timeline degrades to the single interval
/// `[detected_start, reported_active_time_ms)`.
pub fn combat_breakpoints(player: &Player, tick_count: usize, duration_ms: i64) -> CombatTimeline {
    let mut start = detect_start(player, 0);

    let Some(replay) = &player.replay else {
        return fallback(player, start, duration_ms);
    };

    let mut intervals = Vec::new();
    for death in &replay.deaths {
        let paired = replay
            .downs
            .iter()
            .find(|down| down.paired_ms == death.at_ms);
        if paired.is_some() {
            if let Some(s) = start {
                push_bounded(&mut intervals, s, death.at_ms, duration_ms);
            }
            start = detect_start(player, death.at_ms + 1000);
        }
    }

    if let Some(s) = start {
        push_bounded(&mut intervals, s, tick_count as i64 * 1000, duration_ms);
    }

    CombatTimeline {
        intervals,
        degraded: false,
    }
}

fn fallback(player: &Player, start: Option<i64>, duration_ms: i64) -> CombatTimeline {
    warn!(
        player = %player.key,
        "no replay death data; using reported active time for combat timeline"
    );
    let mut intervals = Vec::new();
    if let Some(s) = start {
        push_bounded(
            &mut intervals,
            s,
            player.reported_active_time_ms,
            duration_ms,
        );
    }
    CombatTimeline {
        intervals,
        degraded: true,
    }
}

fn push_bounded(intervals: &mut Vec<TimeInterval>, start_ms: i64, end_ms: i64, duration_ms: i64) {
    let start = start_ms.max(0);
    let end = end_ms.min(duration_ms);
    if end > start {
        intervals.push(TimeInterval::new(start, end));
    }
}
