//! Error types for fight scoring

use thiserror::Error;
use warclaw_types::PlayerKey;

/// Errors raised while validating or scoring a single fight.
///
/// A failed fight never aborts a batch; the batch driver surfaces the error
/// as a warning labeled with the fight number and keeps going.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("fight has no players")]
    NoPlayers,

    #[error("{series} series for {player} has {actual} ticks, expected {expected}")]
    SeriesLength {
        player: PlayerKey,
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{player} carries damage series for {actual} targets, fight lists {expected}")]
    TargetSeries {
        player: PlayerKey,
        expected: usize,
        actual: usize,
    },
}
