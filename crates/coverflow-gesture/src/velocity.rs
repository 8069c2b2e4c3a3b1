//! Instantaneous velocity from the most recent sample interval.

/// First-derivative velocity estimate over the last sample pair.
///
/// Deliberately not a smoothed window: the flick decision keys off the
/// final interval before release, so a late fast movement dominates even
/// when the drag started slow. The flip side is sensitivity to a single
/// noisy sample near release; hosts that see flaky flick detection should
/// look here first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LastIntervalVelocity {
    last_x: f32,
    last_time_ms: u64,
    velocity: f32,
}

impl LastIntervalVelocity {
    pub fn new(x: f32, time_ms: u64) -> Self {
        Self {
            last_x: x,
            last_time_ms: time_ms,
            velocity: 0.0,
        }
    }

    /// Folds in a new sample. Samples sharing a timestamp with the previous
    /// one keep the prior estimate instead of dividing by zero.
    pub fn update(&mut self, x: f32, time_ms: u64) {
        let elapsed = time_ms.saturating_sub(self.last_time_ms);
        if elapsed > 0 {
            self.velocity = (x - self.last_x) / elapsed as f32;
        }
        self.last_x = x;
        self.last_time_ms = time_ms;
    }

    /// Pixels per millisecond over the last interval, signed.
    pub fn value(&self) -> f32 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_last_interval_only() {
        let mut tracker = LastIntervalVelocity::new(0.0, 0);
        tracker.update(10.0, 100); // 0.1 px/ms
        tracker.update(110.0, 200); // 1.0 px/ms
        assert_eq!(tracker.value(), 1.0);
    }

    #[test]
    fn late_fast_interval_dominates_a_slow_start() {
        let mut tracker = LastIntervalVelocity::new(0.0, 0);
        for step in 1..=10u64 {
            tracker.update(step as f32, step * 50); // crawling
        }
        tracker.update(90.0, 510); // sudden 8 px/ms burst at the end
        assert!(tracker.value() > 7.9);
    }

    #[test]
    fn negative_motion_gives_negative_velocity() {
        let mut tracker = LastIntervalVelocity::new(200.0, 0);
        tracker.update(140.0, 100);
        assert!((tracker.value() + 0.6).abs() < 1e-6);
    }

    #[test]
    fn duplicate_timestamp_keeps_previous_estimate() {
        let mut tracker = LastIntervalVelocity::new(0.0, 0);
        tracker.update(50.0, 100);
        let before = tracker.value();
        tracker.update(500.0, 100);
        assert_eq!(tracker.value(), before);
    }

    #[test]
    fn no_motion_is_zero() {
        let tracker = LastIntervalVelocity::new(33.0, 5);
        assert_eq!(tracker.value(), 0.0);
    }
}
