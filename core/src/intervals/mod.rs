//! Interval arithmetic for combat timelines and buff states
//!
//! This module provides:
//! - **TimeInterval**: half-open `[start_ms, end_ms)` combat windows
//! - **StackSpan**: a buff stack count held over a window
//! - `split_states`: expand sparse stack-change events into spans
//! - `clip_spans`: intersect spans against combat windows (two-pointer merge)
//!
//! Everything here is pure arithmetic with no dependencies on the rest of
//! the engine; the segmenter and attributor build on it.

mod splitter;

#[cfg(test)]
mod splitter_tests;

pub use splitter::{StackSpan, TimeInterval, clip_spans, split_states, sum_durations};
