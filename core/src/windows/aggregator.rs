//! Burst, chunk, carrion, and coordination damage for one fight.

use serde::Serialize;

use crate::fight::{Fight, damage_deltas};

/// Widest sliding window, in seconds.
pub const MAX_WINDOW_SECS: usize = 20;

/// Window-indexed bucket count; index = window size, index 0 unused.
pub const WINDOW_BUCKETS: usize = MAX_WINDOW_SECS + 1;

/// Chunk window that feeds the kill-securing synthetic series.
const CH5CA_WINDOW_SECS: usize = 5;

/// Per-player context the fight driver computes before window aggregation.
#[derive(Debug, Clone)]
pub struct PlayerWindowCtx {
    /// Cumulative damage to enemy players, one value per tick.
    pub series: Vec<i64>,
    /// In squad with nonzero combat time; contributes to the squad series.
    pub in_combat: bool,
    /// `in_combat` and not blacklisted; receives per-player stats.
    pub scored: bool,
}

/// Sliding-window metrics for one player in one fight.
#[derive(Debug, Clone, Serialize)]
pub struct WindowStats {
    /// Total damage to enemy players.
    pub damage_total: i64,
    /// Squad-wide damage total, repeated per player for percentage displays.
    pub squad_damage_total: i64,
    /// Damage weighted by how much the squad was hitting at the same time.
    pub coordination_damage: f64,
    /// Damage within `w` seconds before an enemy down, by window size.
    pub chunk_damage: [i64; WINDOW_BUCKETS],
    /// Squad-wide chunk damage on the same `(target, down)` windows.
    pub chunk_damage_total: [i64; WINDOW_BUCKETS],
    /// Damage inside down-to-death execute windows.
    pub carrion_damage: i64,
    pub carrion_damage_total: i64,
    /// Maximum damage in any contiguous `w`-second window.
    pub burst_damage: [i64; WINDOW_BUCKETS],
    /// Burst over the kill-securing synthetic series only.
    pub ch5ca_burst_damage: [i64; WINDOW_BUCKETS],
}

impl Default for WindowStats {
    fn default() -> Self {
        Self {
            damage_total: 0,
            squad_damage_total: 0,
            coordination_damage: 0.0,
            chunk_damage: [0; WINDOW_BUCKETS],
            chunk_damage_total: [0; WINDOW_BUCKETS],
            carrion_damage: 0,
            carrion_damage_total: 0,
            burst_damage: [0; WINDOW_BUCKETS],
            ch5ca_burst_damage: [0; WINDOW_BUCKETS],
        }
    }
}

impl WindowStats {
    /// Fold another fight's window stats for the same player into this one.
    ///
    /// Sums everywhere except the burst tables, which keep the best window
    /// seen across fights.
    pub fn absorb(&mut self, other: &WindowStats) {
        self.damage_total += other.damage_total;
        self.squad_damage_total += other.squad_damage_total;
        self.coordination_damage += other.coordination_damage;
        self.carrion_damage += other.carrion_damage;
        self.carrion_damage_total += other.carrion_damage_total;
        for w in 1..WINDOW_BUCKETS {
            self.chunk_damage[w] += other.chunk_damage[w];
            self.chunk_damage_total[w] += other.chunk_damage_total[w];
            self.burst_damage[w] = self.burst_damage[w].max(other.burst_damage[w]);
            self.ch5ca_burst_damage[w] = self.ch5ca_burst_damage[w].max(other.ch5ca_burst_damage[w]);
        }
    }
}

/// Cumulative read with the index clamped into the series.
fn at(series: &[i64], idx: usize) -> i64 {
    match series.get(idx) {
        Some(&value) => value,
        None => series.last().copied().unwrap_or(0),
    }
}

/// Centered moving average with the window clamped at both array bounds.
pub fn moving_average(data: &[i64], radius: usize) -> Vec<f64> {
    let mut averaged = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        let start = i.saturating_sub(radius);
        let end = (i + radius).min(data.len() - 1);
        let sum: i64 = data[start..=end].iter().sum();
        averaged.push(sum as f64 / (end - start + 1) as f64);
    }
    averaged
}

/// Sliding maximum over every window size, each scanned independently.
fn burst(series: &[i64]) -> [i64; WINDOW_BUCKETS] {
    let mut out = [0; WINDOW_BUCKETS];
    for w in 1..=MAX_WINDOW_SECS {
        for t in w..series.len() {
            out[w] = out[w].max(series[t] - series[t - w]);
        }
    }
    out
}

/// Compute the window metrics for every player in the fight.
///
/// `ctx` is indexed like `fight.players`; unscored players get default
/// (all-zero) stats.
pub fn aggregate(fight: &Fight, ctx: &[PlayerWindowCtx], fight_secs: i64) -> Vec<WindowStats> {
    debug_assert_eq!(ctx.len(), fight.players.len());

    let tick_count = fight.tick_count();
    let mut stats = vec![WindowStats::default(); ctx.len()];
    if tick_count == 0 {
        return stats;
    }

    // Squad per-tick damage over everyone with combat time.
    let squad_ticks = tick_count - 1;
    let mut squad_per_tick = vec![0i64; squad_ticks];
    for player_ctx in ctx.iter().filter(|c| c.in_combat) {
        for (t, slot) in squad_per_tick.iter_mut().enumerate() {
            *slot += at(&player_ctx.series, t + 1) - at(&player_ctx.series, t);
        }
    }
    let squad_total: i64 = squad_per_tick.iter().sum();
    let squad_ma = moving_average(&squad_per_tick, 1);
    let squad_ma_total: f64 = squad_ma.iter().sum();

    // Totals and coordination damage; allocate the synthetic series.
    let mut ch5ca: Vec<Vec<i64>> = vec![Vec::new(); ctx.len()];
    for (p, player_ctx) in ctx.iter().enumerate() {
        if !player_ctx.scored {
            continue;
        }
        ch5ca[p] = vec![0; tick_count];

        let entry = &mut stats[p];
        entry.damage_total = player_ctx.series.last().copied().unwrap_or(0);
        entry.squad_damage_total = squad_total;

        let player_ma = moving_average(&damage_deltas(&player_ctx.series), 1);
        if squad_ma_total != 0.0 {
            for t in 0..squad_ticks {
                let player_on_tick = player_ma[t];
                if player_on_tick == 0.0 {
                    continue;
                }
                let squad_on_tick = squad_ma[t];
                if squad_on_tick == 0.0 {
                    continue;
                }
                entry.coordination_damage +=
                    player_on_tick * (squad_on_tick / squad_ma_total) * fight_secs as f64;
            }
        }
    }

    accumulate_chunk(fight, ctx, &mut stats, &mut ch5ca, tick_count);
    accumulate_carrion(fight, ctx, &mut stats, &mut ch5ca, tick_count);

    // Burst over the real series and over the synthetic kill-securing one.
    for (p, player_ctx) in ctx.iter().enumerate() {
        if !player_ctx.scored {
            continue;
        }
        stats[p].burst_damage = burst(&player_ctx.series);

        let mut cumulative = vec![0i64; tick_count];
        cumulative[0] = ch5ca[p][0];
        for i in 1..tick_count {
            cumulative[i] = cumulative[i - 1] + ch5ca[p][i];
        }
        stats[p].ch5ca_burst_damage = burst(&cumulative);
    }

    stats
}

/// Damage dealt within `w` seconds before each enemy down.
fn accumulate_chunk(
    fight: &Fight,
    ctx: &[PlayerWindowCtx],
    stats: &mut [WindowStats],
    ch5ca: &mut [Vec<i64>],
    tick_count: usize,
) {
    for (t_idx, target) in fight.targets.iter().enumerate() {
        if !target.enemy_player {
            continue;
        }
        let Some(replay) = &target.replay else {
            continue;
        };
        if replay.downs.is_empty() {
            continue;
        }

        for w in 1..=MAX_WINDOW_SECS {
            for (down_pos, down) in replay.downs.iter().enumerate() {
                let down_idx = (down.at_ms / 1000).max(0) as usize;
                let mut start_idx = down_idx.saturating_sub(w);
                if down_pos > 0 {
                    let prev_idx = (replay.downs[down_pos - 1].at_ms / 1000).max(0) as usize;
                    if prev_idx == down_idx {
                        // Two downs in one tick are indistinguishable in the
                        // per-second series (mist-form revives); skip.
                        continue;
                    }
                    // Never re-count ticks already covered by the previous
                    // down of this target.
                    start_idx = start_idx.max(prev_idx);
                }

                let mut squad_on_target = 0;
                for (p, player_ctx) in ctx.iter().enumerate() {
                    if !player_ctx.scored {
                        continue;
                    }
                    let series = &fight.players[p].target_damage_1s[t_idx];
                    let damage = at(series, down_idx) - at(series, start_idx);
                    stats[p].chunk_damage[w] += damage;
                    squad_on_target += damage;

                    if w == CH5CA_WINDOW_SECS {
                        fold_ch5ca(&mut ch5ca[p], series, start_idx, down_idx, tick_count);
                    }
                }

                for (p, player_ctx) in ctx.iter().enumerate() {
                    if player_ctx.scored {
                        stats[p].chunk_damage_total[w] += squad_on_target;
                    }
                }
            }
        }
    }
}

/// Damage dealt inside each down-to-death execute window.
fn accumulate_carrion(
    fight: &Fight,
    ctx: &[PlayerWindowCtx],
    stats: &mut [WindowStats],
    ch5ca: &mut [Vec<i64>],
    tick_count: usize,
) {
    for (t_idx, target) in fight.targets.iter().enumerate() {
        if !target.enemy_player {
            continue;
        }
        let Some(replay) = &target.replay else {
            continue;
        };
        if replay.deaths.is_empty() {
            continue;
        }

        for death in &replay.deaths {
            for down in &replay.downs {
                if down.paired_ms != death.at_ms {
                    continue;
                }
                let dmg_start = (down.at_ms + 999).div_euclid(1000).max(0) as usize;
                let dmg_end = (death.at_ms + 999).div_euclid(1000).max(0) as usize;

                let mut squad_on_target = 0;
                for (p, player_ctx) in ctx.iter().enumerate() {
                    if !player_ctx.scored {
                        continue;
                    }
                    let series = &fight.players[p].target_damage_1s[t_idx];
                    let damage = at(series, dmg_end) - at(series, dmg_start);
                    stats[p].carrion_damage += damage;
                    squad_on_target += damage;
                    fold_ch5ca(&mut ch5ca[p], series, dmg_start, dmg_end, tick_count);
                }

                for (p, player_ctx) in ctx.iter().enumerate() {
                    if player_ctx.scored {
                        stats[p].carrion_damage_total += squad_on_target;
                    }
                }
            }
        }
    }
}

/// Fold a window's per-tick deltas into the synthetic kill-securing series.
fn fold_ch5ca(ch5ca: &mut [i64], series: &[i64], from: usize, to: usize, tick_count: usize) {
    let to = to.min(tick_count.saturating_sub(1));
    for i in from..to {
        ch5ca[i] += at(series, i + 1) - at(series, i);
    }
}
