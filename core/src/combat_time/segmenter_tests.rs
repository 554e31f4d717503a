//! Tests for combat timeline reconstruction
//!
//! Verifies that:
//! - Start detection picks the earlier of damage-taken and damage-dealt
//! - Death/down pairs split the timeline into multiple segments
//! - Output is deterministic, ascending, and bounded by the fight duration
//! - Missing replay data degrades to the reported active time

use warclaw_types::PlayerKey;

use super::combat_breakpoints;
use crate::fight::{Player, Replay, ReplayEvent};
use crate::intervals::TimeInterval;

fn make_player() -> Player {
    Player {
        key: PlayerKey::new("Rho", "Scrapper", "rho.1234"),
        not_in_squad: false,
        reported_active_time_ms: 0,
        health_percents: Vec::new(),
        damage_1s: Vec::new(),
        power_damage_1s: Vec::new(),
        target_damage_1s: Vec::new(),
        replay: Some(Replay::default()),
        buff_states: Vec::new(),
    }
}

/// Flat cumulative power damage: no damage-dealt detection fires.
fn flat_power(ticks: usize) -> Vec<i64> {
    vec![0; ticks]
}

#[test]
fn start_from_health_decrease() {
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (2000, 90.0), (4000, 95.0)];
    player.power_damage_1s = flat_power(20);

    let timeline = combat_breakpoints(&player, 20, 20000);
    assert_eq!(timeline.intervals, vec![TimeInterval::new(2000, 20000)]);
    assert!(!timeline.degraded);
}

#[test]
fn start_takes_earlier_of_both_detections() {
    let mut player = make_player();
    // Health drops at 5000 ms, but power damage already moves at tick 3.
    player.health_percents = vec![(0, 100.0), (5000, 80.0)];
    player.power_damage_1s = vec![0, 0, 0, 120, 120, 120, 120, 120];

    let timeline = combat_breakpoints(&player, 8, 8000);
    assert_eq!(timeline.intervals, vec![TimeInterval::new(3000, 8000)]);
}

#[test]
fn death_pair_closes_segment_and_restarts_detection() {
    // Down at 8000 carries paired value 10000; death at 10000 matches by
    // value. Start detected at 2000, so the first segment is [2000, 10000).
    // Detection restarts at 11000 and the next health drop is at 15000.
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (2000, 90.0), (14000, 95.0), (15000, 80.0)];
    player.power_damage_1s = flat_power(20);
    player.replay = Some(Replay {
        downs: vec![ReplayEvent::new(8000, 10000)],
        deaths: vec![ReplayEvent::new(10000, 18000)],
    });

    let timeline = combat_breakpoints(&player, 20, 20000);
    assert_eq!(timeline.intervals, vec![
        TimeInterval::new(2000, 10000),
        TimeInterval::new(15000, 20000),
    ]);
}

#[test]
fn unmatched_death_leaves_segment_open() {
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (2000, 90.0)];
    player.power_damage_1s = flat_power(12);
    // Down's paired value does not equal the death timestamp: no match, the
    // segment stays open until fight end.
    player.replay = Some(Replay {
        downs: vec![ReplayEvent::new(8000, 9500)],
        deaths: vec![ReplayEvent::new(10000, 11000)],
    });

    let timeline = combat_breakpoints(&player, 12, 12000);
    assert_eq!(timeline.intervals, vec![TimeInterval::new(2000, 12000)]);
}

#[test]
fn deterministic_and_bounded() {
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (1000, 70.0), (6000, 60.0), (9000, 50.0)];
    player.power_damage_1s = vec![0, 50, 50, 80, 80, 80, 90, 90, 90, 90];
    player.replay = Some(Replay {
        downs: vec![ReplayEvent::new(4000, 5000)],
        deaths: vec![ReplayEvent::new(5000, 7000)],
    });

    let first = combat_breakpoints(&player, 10, 10000);
    let second = combat_breakpoints(&player, 10, 10000);
    assert_eq!(first, second, "identical input must give identical output");

    let mut previous_end = 0;
    for interval in &first.intervals {
        assert!(interval.start_ms >= 0);
        assert!(interval.end_ms <= 10000);
        assert!(interval.start_ms < interval.end_ms);
        assert!(
            interval.start_ms >= previous_end,
            "intervals must ascend without overlap"
        );
        previous_end = interval.end_ms;
    }
}

#[test]
fn missing_replay_falls_back_to_reported_active_time() {
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (1000, 90.0)];
    player.power_damage_1s = flat_power(30);
    player.reported_active_time_ms = 25000;
    player.replay = None;

    let timeline = combat_breakpoints(&player, 30, 30000);
    assert!(timeline.degraded);
    assert_eq!(timeline.intervals, vec![TimeInterval::new(1000, 25000)]);
    assert_eq!(timeline.combat_time_secs(), 24);
}

#[test]
fn no_detection_yields_empty_timeline() {
    let mut player = make_player();
    player.health_percents = vec![(0, 100.0), (3000, 100.0)];
    player.power_damage_1s = flat_power(10);

    let timeline = combat_breakpoints(&player, 10, 10000);
    assert!(timeline.intervals.is_empty());
    assert_eq!(timeline.combat_time_ms(), 0);
}
