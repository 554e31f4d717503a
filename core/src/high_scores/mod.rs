//! Bounded top-N high-score tables
//!
//! Keeps at most five entries per category with replace-on-increase
//! semantics. Used by the scoring driver for engine-level categories and by
//! the report layer for its own.

mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use tracker::{HIGH_SCORE_CAPACITY, HighScoreEntry, HighScoreTracker, ScoreKey};
