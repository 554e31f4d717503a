//! Per-player combat-active timeline reconstruction
//!
//! Rebuilds the windows a player actually spent in combat from sparse
//! health samples, the dense power-damage series, and the down/death replay
//! events. Downstream stats (stacking attribution, squad tick sums, combat
//! time) all key off these windows.

mod segmenter;

#[cfg(test)]
mod segmenter_tests;

pub use segmenter::{CombatTimeline, combat_breakpoints};
