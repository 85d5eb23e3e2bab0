use log::{log_enabled, trace, warn, Level};
use std::time::{Duration, Instant};

/// Trace span around one stage of the step pipeline.
///
/// Emits nothing unless the `trace` level is enabled for this crate.
pub struct ScopedTimer {
    stage: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(stage: &'static str) -> Self {
        trace!(target: "convex_impulse::timing", "enter {stage}");
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if log_enabled!(target: "convex_impulse::timing", Level::Trace) {
            trace!(
                target: "convex_impulse::timing",
                "leave {} after {} µs",
                self.stage,
                self.start.elapsed().as_micros()
            );
        }
    }
}

/// Warns when a frame ran longer than `budget_ms`. Returns whether it did.
///
/// `pairs_tested` is included because the all-pairs sweep is what grows.
pub fn warn_if_frame_budget_exceeded(
    elapsed: Duration,
    budget_ms: f32,
    pairs_tested: usize,
) -> bool {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    let over = elapsed_ms > budget_ms;
    if over {
        warn!(
            "frame took {elapsed_ms:.2} ms of a {budget_ms:.2} ms budget \
             ({pairs_tested} pairs tested)"
        );
    }
    over
}
