//! Fractional per-tick damage attribution to buff stack levels.

use serde::Serialize;

use crate::game_data::BoonInfo;
use crate::intervals::StackSpan;

/// Stack levels 0..=24 plus one capped bucket for 25 and above.
pub const STACK_BUCKETS: usize = 26;

/// Attribution result for one boon on one player.
#[derive(Debug, Clone, Serialize)]
pub struct BuffStacking {
    /// Damage attributed per stack bucket. The bucket index is
    /// `min(stacks, damage_cap)`, so on/off boons only use buckets 0 and 1.
    pub damage_by_stacks: [f64; STACK_BUCKETS],
    /// Uptime per `min(stacks, 25)` bucket; only filled for boons with
    /// `stack_uptime` (Might, Stability).
    pub uptime_by_stacks: [i64; STACK_BUCKETS],
    /// Total active uptime in milliseconds, independent of damage.
    pub uptime_ms: i64,
}

impl Default for BuffStacking {
    fn default() -> Self {
        Self {
            damage_by_stacks: [0.0; STACK_BUCKETS],
            uptime_by_stacks: [0; STACK_BUCKETS],
            uptime_ms: 0,
        }
    }
}

impl BuffStacking {
    pub fn total_damage(&self) -> f64 {
        self.damage_by_stacks.iter().sum()
    }

    /// Fold another fight's attribution for the same boon into this one.
    pub fn absorb(&mut self, other: &BuffStacking) {
        for (mine, theirs) in self
            .damage_by_stacks
            .iter_mut()
            .zip(other.damage_by_stacks.iter())
        {
            *mine += theirs;
        }
        for (mine, theirs) in self
            .uptime_by_stacks
            .iter_mut()
            .zip(other.uptime_by_stacks.iter())
        {
            *mine += theirs;
        }
        self.uptime_ms += other.uptime_ms;
    }
}

/// Attribute per-tick damage deltas to the stack levels active when the
/// damage landed.
///
/// Span interiors attribute whole ticks; boundary ticks attribute the
/// sub-second fraction inside the span. The first span additionally claims
/// all damage before it, the last span all damage after it, and a gap before
/// the next non-adjacent span goes to the ending span's level, so together
/// the spans cover every tick exactly once.
pub fn attribute_stack_damage(
    spans: &[StackSpan],
    deltas: &[i64],
    boon: &BoonInfo,
) -> BuffStacking {
    let mut out = BuffStacking::default();

    // Damage beyond the series is zero; boundary math may reach one tick
    // past the end when a span closes exactly on the fight duration.
    let tick = |i: usize| deltas.get(i).copied().unwrap_or(0) as f64;
    let tick_sum = |from: usize, to: usize| -> f64 {
        let to = to.min(deltas.len());
        if from >= to {
            return 0.0;
        }
        deltas[from..to].iter().map(|&d| d as f64).sum()
    };

    for (idx, span) in spans.iter().enumerate() {
        if boon.stack_uptime {
            let uptime = span.duration_ms();
            out.uptime_by_stacks[span.stacks.min(25) as usize] += uptime;
            out.uptime_ms += uptime;
        }

        let start_sec = span.start_ms as f64 / 1000.0;
        let end_sec = span.end_ms as f64 / 1000.0;
        let s_idx = (span.start_ms / 1000).max(0) as usize;
        let s_rem = start_sec - s_idx as f64;
        let e_idx = (span.end_ms / 1000).max(0) as usize;
        let e_rem = end_sec - e_idx as f64;

        let mut damage = if s_idx == e_idx {
            tick(s_idx) * (end_sec - start_sec)
        } else {
            tick(s_idx) * (1.0 - s_rem) + tick_sum(s_idx + 1, e_idx) + tick(e_idx) * e_rem
        };

        if idx == 0 {
            // Claim all damage before the first span.
            damage += tick(s_idx) * s_rem;
            damage += tick_sum(0, s_idx);
        }
        if idx == spans.len() - 1 {
            // Claim all damage after the last span. Not an else-if: a single
            // span is both first and last.
            damage += tick(e_idx) * (1.0 - e_rem);
            damage += tick_sum(e_idx + 1, deltas.len());
        } else if span.end_ms != spans[idx + 1].start_ms {
            // Gap before the next span, usually condition ticks after a
            // death; attribute it to the level that was just active.
            let next_sec = spans[idx + 1].start_ms as f64 / 1000.0;
            let n_idx = (spans[idx + 1].start_ms / 1000).max(0) as usize;
            let n_rem = next_sec - n_idx as f64;

            damage += tick(e_idx) * (1.0 - e_rem);
            damage += tick_sum(e_idx + 1, n_idx);
            damage += tick(n_idx) * n_rem;
        }

        let bucket = span.stacks.min(boon.damage_cap).min(25) as usize;
        out.damage_by_stacks[bucket] += damage;
    }

    out
}
