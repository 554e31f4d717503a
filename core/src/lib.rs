//! Combat-timeline aggregation and sliding-window statistics engine.
//!
//! Warclaw scores one WvW fight at a time from fully materialized per-fight
//! data: dense cumulative damage series, sparse health samples, down/death
//! replay events, and buff stack-change events. From those it reconstructs
//! per-player combat-active windows, attributes fractional per-tick damage to
//! concurrent buff-stack levels, and computes the sliding-window damage
//! metrics (burst, chunk, carrion, coordination) plus bounded high-score
//! tables.
//!
//! Everything here is pure CPU over already-loaded data. Parsing the logs and
//! rendering reports belong to the caller; the engine returns immutable
//! per-fight values that an explicit fold step merges across fights.

pub mod combat_time;
pub mod error;
pub mod fight;
pub mod game_data;
pub mod high_scores;
pub mod intervals;
pub mod score;
pub mod stacking;
pub mod windows;

pub use combat_time::{CombatTimeline, combat_breakpoints};
pub use error::ScoringError;
pub use fight::{BuffStates, Fight, Player, Replay, ReplayEvent, Target, damage_deltas};
pub use game_data::{BoonInfo, boon_info};
pub use high_scores::{HIGH_SCORE_CAPACITY, HighScoreEntry, HighScoreTracker, ScoreKey};
pub use intervals::{StackSpan, TimeInterval, clip_spans, split_states, sum_durations};
pub use score::{Batch, BatchWarning, FightScore, PlayerScore, score_fight, score_fights};
pub use stacking::{BuffStacking, STACK_BUCKETS, attribute_stack_damage};
pub use windows::{MAX_WINDOW_SECS, WINDOW_BUCKETS, WindowStats};
