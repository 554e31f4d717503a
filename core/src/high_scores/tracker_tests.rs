//! Tests for bounded high-score tables
//!
//! Verifies that:
//! - Capacity fills, then only strictly higher values evict the minimum
//! - Ties at the eviction boundary keep the incumbent
//! - Existing keys only overwrite upward
//! - Merging replays entries with the same bounded semantics

use warclaw_types::PlayerKey;

use super::{HIGH_SCORE_CAPACITY, HighScoreTracker, ScoreKey};

fn key(n: u32) -> ScoreKey {
    ScoreKey::new(
        PlayerKey::new(format!("Player{n}"), "Spellbreaker", format!("p{n}.1000")),
        1,
    )
}

fn sorted_values(tracker: &HighScoreTracker, category: &str) -> Vec<f64> {
    let mut values: Vec<f64> = tracker
        .category(category)
        .map(|table| table.values().copied().collect())
        .unwrap_or_default();
    values.sort_by(f64::total_cmp);
    values
}

#[test]
fn fills_then_keeps_only_top_five() {
    let mut tracker = HighScoreTracker::new();
    for n in 1..=7 {
        tracker.record("burst_damage_1s", key(n), n as f64);
    }
    assert_eq!(sorted_values(&tracker, "burst_damage_1s"), vec![
        3.0, 4.0, 5.0, 6.0, 7.0
    ]);

    // Below the minimum: no change.
    tracker.record("burst_damage_1s", key(8), 0.0);
    assert_eq!(sorted_values(&tracker, "burst_damage_1s"), vec![
        3.0, 4.0, 5.0, 6.0, 7.0
    ]);

    // Above the minimum: evicts it.
    tracker.record("burst_damage_1s", key(9), 10.0);
    assert_eq!(sorted_values(&tracker, "burst_damage_1s"), vec![
        4.0, 5.0, 6.0, 7.0, 10.0
    ]);
}

#[test]
fn tie_at_eviction_boundary_keeps_incumbent() {
    let mut tracker = HighScoreTracker::new();
    for n in 1..=HIGH_SCORE_CAPACITY as u32 {
        tracker.record("fight_dps", key(n), n as f64);
    }
    tracker.record("fight_dps", key(99), 1.0);
    assert_eq!(sorted_values(&tracker, "fight_dps"), vec![
        1.0, 2.0, 3.0, 4.0, 5.0
    ]);
    assert!(
        tracker
            .category("fight_dps")
            .is_some_and(|t| !t.contains_key(&key(99))),
        "tying entry must not replace the incumbent"
    );
}

#[test]
fn existing_key_only_overwrites_upward() {
    let mut tracker = HighScoreTracker::new();
    tracker.record("fight_dps", key(1), 50.0);
    tracker.record("fight_dps", key(1), 30.0);
    assert_eq!(sorted_values(&tracker, "fight_dps"), vec![50.0]);
    tracker.record("fight_dps", key(1), 80.0);
    assert_eq!(sorted_values(&tracker, "fight_dps"), vec![80.0]);
}

#[test]
fn categories_are_independent() {
    let mut tracker = HighScoreTracker::new();
    tracker.record("fight_dps", key(1), 10.0);
    tracker.record("burst_damage_1s", key(1), 20.0);
    assert_eq!(sorted_values(&tracker, "fight_dps"), vec![10.0]);
    assert_eq!(sorted_values(&tracker, "burst_damage_1s"), vec![20.0]);
}

#[test]
fn merge_replays_with_bounded_semantics() {
    let mut left = HighScoreTracker::new();
    for n in 1..=5 {
        left.record("fight_dps", key(n), n as f64);
    }
    let mut right = HighScoreTracker::new();
    right.record("fight_dps", key(10), 9.0);
    right.record("fight_dps", key(11), 0.5);

    left.merge(&right);
    assert_eq!(sorted_values(&left, "fight_dps"), vec![
        2.0, 3.0, 4.0, 5.0, 9.0
    ]);
}

#[test]
fn entries_sort_by_category_then_value() {
    let mut tracker = HighScoreTracker::new();
    tracker.record("fight_dps", key(1), 10.0);
    tracker.record("fight_dps", key(2), 30.0);
    tracker.record("burst_damage_1s", key(3), 5.0);

    let entries = tracker.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].category, "burst_damage_1s");
    assert_eq!(entries[1].category, "fight_dps");
    assert_eq!(entries[1].value, 30.0);
    assert_eq!(entries[2].value, 10.0);
}
