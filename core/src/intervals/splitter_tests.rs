//! Tests for interval splitting and clipping
//!
//! Verifies that:
//! - Sparse change events expand into the expected spans
//! - Spans fully inside a window survive unchanged
//! - Disjoint and touching span/window pairs yield nothing
//! - Clipped output never exceeds the per-pair overlap durations

use super::{StackSpan, TimeInterval, clip_spans, split_states, sum_durations};

#[test]
fn split_states_expands_changes() {
    let spans = split_states(&[(0, 0), (1000, 2), (5000, 0)], 6000);
    assert_eq!(spans, vec![
        StackSpan::new(0, 1000, 0),
        StackSpan::new(1000, 5000, 2),
        StackSpan::new(5000, 6000, 0),
    ]);
}

#[test]
fn split_states_drops_change_past_duration() {
    let spans = split_states(&[(0, 3), (7000, 1)], 6000);
    assert_eq!(spans, vec![StackSpan::new(0, 6000, 3)]);
}

#[test]
fn span_inside_window_is_unchanged() {
    // Buff changes [(0,0),(1000,2),(5000,0)], 6000 ms fight, one combat
    // window covering the whole fight: every span survives unclipped.
    let spans = split_states(&[(0, 0), (1000, 2), (5000, 0)], 6000);
    let clipped = clip_spans(&spans, &[TimeInterval::new(0, 6000)]);
    assert_eq!(clipped, spans);
    assert!(clipped.contains(&StackSpan::new(1000, 5000, 2)));
}

#[test]
fn span_with_no_window_overlap_yields_nothing() {
    let spans = vec![StackSpan::new(0, 500, 4)];
    assert!(clip_spans(&spans, &[TimeInterval::new(1000, 2000)]).is_empty());

    let spans = vec![StackSpan::new(3000, 4000, 4)];
    assert!(clip_spans(&spans, &[TimeInterval::new(0, 2000)]).is_empty());
}

#[test]
fn touching_boundary_yields_nothing() {
    let spans = vec![StackSpan::new(0, 1000, 4)];
    assert!(clip_spans(&spans, &[TimeInterval::new(1000, 2000)]).is_empty());
}

#[test]
fn no_windows_yields_nothing() {
    let spans = vec![StackSpan::new(0, 1000, 4)];
    assert!(clip_spans(&spans, &[]).is_empty());
}

#[test]
fn span_straddling_window_clips_both_edges() {
    let spans = vec![StackSpan::new(0, 12000, 5)];
    let windows = vec![TimeInterval::new(2000, 9000)];
    assert_eq!(clip_spans(&spans, &windows), vec![StackSpan::new(
        2000, 9000, 5
    )]);
}

#[test]
fn spans_split_across_windows() {
    // A death gap between two combat windows: the span that ends inside the
    // gap is clipped against the second window when it comes up.
    let spans = vec![
        StackSpan::new(0, 2000, 1),
        StackSpan::new(2000, 8000, 2),
        StackSpan::new(8000, 10000, 3),
    ];
    let windows = vec![TimeInterval::new(0, 4000), TimeInterval::new(6000, 10000)];
    let clipped = clip_spans(&spans, &windows);
    assert_eq!(clipped, vec![
        StackSpan::new(0, 2000, 1),
        StackSpan::new(6000, 8000, 2),
        StackSpan::new(8000, 10000, 3),
    ]);
}

#[test]
fn clipped_durations_bounded_by_overlap() {
    let spans = vec![
        StackSpan::new(500, 2500, 1),
        StackSpan::new(2500, 6000, 2),
    ];
    let windows = vec![TimeInterval::new(0, 3000), TimeInterval::new(4000, 5000)];
    let clipped = clip_spans(&spans, &windows);

    let clipped_total: i64 = clipped.iter().map(StackSpan::duration_ms).sum();
    let mut overlap_total = 0;
    for span in &spans {
        for window in &windows {
            let start = span.start_ms.max(window.start_ms);
            let end = span.end_ms.min(window.end_ms);
            overlap_total += (end - start).max(0);
        }
    }
    assert!(
        clipped_total <= overlap_total,
        "clipped {clipped_total} ms exceeds overlap {overlap_total} ms"
    );
    // Every emitted span stays inside some window.
    for span in &clipped {
        assert!(
            windows
                .iter()
                .any(|w| span.start_ms >= w.start_ms && span.end_ms <= w.end_ms),
            "span {span:?} escapes the windows"
        );
    }
}

#[test]
fn sum_durations_ignores_degenerate_intervals() {
    let intervals = vec![TimeInterval::new(0, 1000), TimeInterval::new(5000, 5000)];
    assert_eq!(sum_durations(&intervals), 1000);
}
