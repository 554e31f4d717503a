//! Interval model and the clipping merge.

use serde::Serialize;

/// Half-open `[start_ms, end_ms)` window of fight time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeInterval {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end_ms - self.start_ms).max(0)
    }
}

/// Total duration of a list of intervals.
pub fn sum_durations(intervals: &[TimeInterval]) -> i64 {
    intervals.iter().map(TimeInterval::duration_ms).sum()
}

/// A stack count held over a half-open window of fight time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSpan {
    pub start_ms: i64,
    pub end_ms: i64,
    pub stacks: u32,
}

impl StackSpan {
    pub fn new(start_ms: i64, end_ms: i64, stacks: u32) -> Self {
        Self {
            start_ms,
            end_ms,
            stacks,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end_ms - self.start_ms).max(0)
    }
}

/// Expand sparse `(timestamp_ms, stacks)` change events into spans.
///
/// Each change holds until the next change's timestamp; the final change
/// extends to the fight duration and is dropped entirely if it starts at or
/// past it.
pub fn split_states(changes: &[(i64, u32)], duration_ms: i64) -> Vec<StackSpan> {
    let mut spans = Vec::with_capacity(changes.len());
    for (index, &(start, stacks)) in changes.iter().enumerate() {
        if index == changes.len() - 1 {
            if start < duration_ms {
                spans.push(StackSpan::new(start, duration_ms, stacks));
            }
        } else {
            spans.push(StackSpan::new(
                start,
                changes[index + 1].0.min(duration_ms),
                stacks,
            ));
        }
    }
    spans
}

/// Clip sorted disjoint spans against sorted disjoint windows.
///
/// Two-pointer merge: take the front window and front span, drop spans that
/// end before the window opens, clip each overlapping pair to
/// `[max(starts), min(ends))` and emit only non-degenerate results, then
/// consume every remaining span contained in the window before advancing.
/// Touching boundaries (`span.end == window.start`) yield nothing.
pub fn clip_spans(spans: &[StackSpan], windows: &[TimeInterval]) -> Vec<StackSpan> {
    let mut clipped = Vec::new();
    let mut wi = 0;
    let mut si = 0;

    while wi < windows.len() && si < spans.len() {
        let window = windows[wi];
        wi += 1;
        let mut span = spans[si];
        si += 1;

        // Skip spans that ended before this window opened.
        while span.end_ms < window.start_ms {
            if si >= spans.len() {
                break;
            }
            span = spans[si];
            si += 1;
        }
        if span.end_ms < window.start_ms {
            break;
        }

        push_clipped(&mut clipped, span, window);

        // Consume the spans that end inside this window.
        while si < spans.len() && spans[si].end_ms <= window.end_ms {
            span = spans[si];
            si += 1;
            push_clipped(&mut clipped, span, window);
        }
    }

    clipped
}

fn push_clipped(out: &mut Vec<StackSpan>, span: StackSpan, window: TimeInterval) {
    let start = span.start_ms.max(window.start_ms);
    let end = span.end_ms.min(window.end_ms);
    if end > start {
        out.push(StackSpan::new(start, end, span.stacks));
    }
}
