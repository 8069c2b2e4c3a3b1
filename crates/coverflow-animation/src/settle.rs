//! The release animation played after a drag ends.
//!
//! The timeline is purely cosmetic. The slider's logical index changes at
//! release time; this only moves the visual track, first past the new rest
//! position and then back to zero, or straight back to zero when the drag
//! did not navigate.

use crate::{Easing, TweenSpec};

/// One eased translation segment of the settle motion.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: f32,
    to: f32,
    tween: TweenSpec,
}

impl Segment {
    fn value_at(&self, elapsed_ms: u64) -> f32 {
        let progress = self.tween.progress(elapsed_ms);
        self.from + (self.to - self.from) * progress
    }
}

/// Description of a settle motion, built at release time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlePlan {
    segments: [Segment; 2],
    len: usize,
}

impl SettlePlan {
    /// Duration of the overshoot phase.
    pub const OVERSHOOT_MS: u64 = 220;
    /// Duration of the return-to-zero phase.
    pub const RETURN_MS: u64 = 180;

    /// Overshoot in the navigation direction, then return to zero.
    ///
    /// `overshoot_px` is signed; its sign is the direction the track keeps
    /// moving after release.
    pub fn navigate(overshoot_px: f32) -> Self {
        Self {
            segments: [
                Segment {
                    from: 0.0,
                    to: overshoot_px,
                    tween: TweenSpec::new(Self::OVERSHOOT_MS, Easing::EaseOut),
                },
                Segment {
                    from: overshoot_px,
                    to: 0.0,
                    tween: TweenSpec::new(Self::RETURN_MS, Easing::EaseInOut),
                },
            ],
            len: 2,
        }
    }

    /// Ease the track from the abandoned drag offset straight back to zero.
    pub fn snap_back(from_offset: f32) -> Self {
        let segment = Segment {
            from: from_offset,
            to: 0.0,
            tween: TweenSpec::new(Self::RETURN_MS, Easing::EaseOut),
        };
        Self {
            segments: [segment, segment],
            len: 1,
        }
    }

    fn total_ms(&self) -> u64 {
        self.segments[..self.len]
            .iter()
            .map(|s| s.tween.duration_ms)
            .sum()
    }
}

/// A sampled point of a running settle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSample {
    pub track_offset: f32,
    pub finished: bool,
}

/// A [`SettlePlan`] anchored to the first frame that samples it.
///
/// Dropping the timeline cancels the motion; there is nothing to unhook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleTimeline {
    plan: SettlePlan,
    start_ms: Option<u64>,
}

impl SettleTimeline {
    pub fn new(plan: SettlePlan) -> Self {
        Self {
            plan,
            start_ms: None,
        }
    }

    /// Track offset at `now_ms`. The first call anchors the start time.
    pub fn sample(&mut self, now_ms: u64) -> SettleSample {
        let start = *self.start_ms.get_or_insert(now_ms);
        let mut elapsed = now_ms.saturating_sub(start);

        if elapsed >= self.plan.total_ms() {
            return SettleSample {
                track_offset: 0.0,
                finished: true,
            };
        }

        for segment in &self.plan.segments[..self.plan.len] {
            if elapsed < segment.tween.duration_ms {
                return SettleSample {
                    track_offset: segment.value_at(elapsed),
                    finished: false,
                };
            }
            elapsed -= segment.tween.duration_ms;
        }

        SettleSample {
            track_offset: 0.0,
            finished: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_overshoots_then_returns() {
        let mut timeline = SettleTimeline::new(SettlePlan::navigate(-180.0));

        let start = timeline.sample(1_000);
        assert_eq!(start.track_offset, 0.0);
        assert!(!start.finished);

        // Deep into the overshoot phase the track has moved in the
        // navigation direction.
        let mid = timeline.sample(1_150);
        assert!(mid.track_offset < -100.0, "got {}", mid.track_offset);
        assert!(!mid.finished);

        // Return phase heads back toward zero.
        let returning = timeline.sample(1_000 + 220 + 90);
        assert!(returning.track_offset < 0.0);
        assert!(returning.track_offset > -180.0);

        let done = timeline.sample(1_000 + 220 + 180);
        assert_eq!(done.track_offset, 0.0);
        assert!(done.finished);
    }

    #[test]
    fn snap_back_eases_to_zero() {
        let mut timeline = SettleTimeline::new(SettlePlan::snap_back(42.0));

        assert_eq!(timeline.sample(0).track_offset, 42.0);

        let mid = timeline.sample(90);
        assert!(mid.track_offset > 0.0 && mid.track_offset < 42.0);

        let done = timeline.sample(180);
        assert_eq!(done.track_offset, 0.0);
        assert!(done.finished);
    }

    #[test]
    fn sampling_past_the_end_stays_finished() {
        let mut timeline = SettleTimeline::new(SettlePlan::navigate(160.0));
        timeline.sample(0);
        assert!(timeline.sample(10_000).finished);
        assert!(timeline.sample(20_000).finished);
    }

    #[test]
    fn first_sample_anchors_start_time() {
        let mut timeline = SettleTimeline::new(SettlePlan::navigate(160.0));
        // Anchored at 5000, so 5220 is exactly the end of the overshoot.
        timeline.sample(5_000);
        let at_peak = timeline.sample(5_219);
        assert!(at_peak.track_offset > 150.0);
    }
}
