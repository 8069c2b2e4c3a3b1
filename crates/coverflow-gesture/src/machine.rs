//! The press, drag, release, settle state machine.

use coverflow_animation::SettlePlan;

use crate::constants::{
    distance_threshold, FLICK_TRIGGER_PX_PER_MS, OVERSHOOT_MAX_PX, OVERSHOOT_MIN_PX,
    OVERSHOOT_PX_PER_VELOCITY, TAP_SLOP_PX,
};
use crate::pointer::{HitTarget, PointerEvent, PointerEventKind, PointerId};
use crate::velocity::LastIntervalVelocity;

/// Which way a navigating release moves the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward higher indices; the track moved left.
    Forward,
    /// Toward lower indices; the track moved right.
    Backward,
}

/// Observable machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pressed,
    Dragging,
    Settling,
}

/// Everything tracked for the one honored pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureRecord {
    pointer: PointerId,
    start_x: f32,
    displacement: f32,
    velocity: LastIntervalVelocity,
}

impl GestureRecord {
    fn new(event: &PointerEvent) -> Self {
        Self {
            pointer: event.id,
            start_x: event.x,
            displacement: 0.0,
            velocity: LastIntervalVelocity::new(event.x, event.time_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed(GestureRecord),
    Dragging(GestureRecord),
    Settling,
}

/// How a completed gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Neither trigger fired; the track eases back to rest.
    SnapBack { plan: SettlePlan },
    /// Exactly one navigation step, with the cosmetic settle to play.
    Navigate {
        direction: NavDirection,
        plan: SettlePlan,
    },
    /// Press and release with no meaningful movement. The host may toggle
    /// its chrome; the machine is done with it.
    Tap,
}

/// Result of feeding one pointer event through the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureResponse {
    /// Event was not for the honored pointer, or landed on a control.
    Ignored,
    /// A new gesture began. `cancelled_settle` is set when the press
    /// interrupted a playing settle animation; the host must zero the
    /// track offset before painting the new drag.
    PressAccepted { cancelled_settle: bool },
    /// The track follows the finger; paint this offset.
    TrackMoved(f32),
    /// The pointer lifted; the decision is final and the index step, if
    /// any, applies immediately.
    Released(ReleaseOutcome),
}

/// State machine over a single logical pointer.
///
/// A second pointer pressing while one is tracked is ignored wholesale,
/// which is what keeps this machine safe without any locking: there is
/// never more than one active gesture record.
#[derive(Debug, Default)]
pub struct GestureMachine {
    phase: Phase,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Pressed(_) => GesturePhase::Pressed,
            Phase::Dragging(_) => GesturePhase::Dragging,
            Phase::Settling => GesturePhase::Settling,
        }
    }

    /// True while a press or drag holds the pointer.
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Pressed(_) | Phase::Dragging(_))
    }

    /// Feeds one pointer event through the machine.
    ///
    /// `viewport_width` is only consulted on release, for the distance
    /// trigger.
    pub fn handle(&mut self, event: PointerEvent, viewport_width: f32) -> GestureResponse {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_release(event, viewport_width),
        }
    }

    /// The settle animation finished or was torn down; back to rest.
    pub fn settle_finished(&mut self) {
        if matches!(self.phase, Phase::Settling) {
            self.phase = Phase::Idle;
        }
    }

    /// Drops any in-flight gesture, e.g. when the slider closes.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn on_down(&mut self, event: PointerEvent) -> GestureResponse {
        if event.target == HitTarget::Control {
            // Control presses are discrete clicks, never drags.
            return GestureResponse::Ignored;
        }
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Pressed(GestureRecord::new(&event));
                GestureResponse::PressAccepted {
                    cancelled_settle: false,
                }
            }
            Phase::Settling => {
                // A press lands mid-settle: cancel the animation and take
                // over from a zeroed track.
                self.phase = Phase::Pressed(GestureRecord::new(&event));
                GestureResponse::PressAccepted {
                    cancelled_settle: true,
                }
            }
            Phase::Pressed(record) | Phase::Dragging(record) => {
                log::trace!(
                    "ignoring pointer {} while pointer {} is active",
                    event.id,
                    record.pointer
                );
                GestureResponse::Ignored
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent) -> GestureResponse {
        let mut record = match self.phase {
            Phase::Pressed(record) | Phase::Dragging(record) if record.pointer == event.id => {
                record
            }
            _ => return GestureResponse::Ignored,
        };

        record.displacement = event.x - record.start_x;
        record.velocity.update(event.x, event.time_ms);
        self.phase = Phase::Dragging(record);
        GestureResponse::TrackMoved(record.displacement)
    }

    fn on_release(&mut self, event: PointerEvent, viewport_width: f32) -> GestureResponse {
        let (record, was_pressed) = match self.phase {
            Phase::Pressed(record) if record.pointer == event.id => (record, true),
            Phase::Dragging(record) if record.pointer == event.id => (record, false),
            _ => return GestureResponse::Ignored,
        };

        let displacement = if was_pressed {
            record.displacement
        } else {
            event.x - record.start_x
        };
        let velocity = record.velocity.value();

        let outcome = decide(
            displacement,
            velocity,
            viewport_width,
            event.kind == PointerEventKind::Up,
        );

        self.phase = match outcome {
            ReleaseOutcome::Tap => Phase::Idle,
            _ => Phase::Settling,
        };
        log::debug!(
            "release: displacement {displacement:.1}px velocity {velocity:.3}px/ms -> {outcome:?}"
        );
        GestureResponse::Released(outcome)
    }
}

/// The release decision: two independent triggers, either sufficient.
fn decide(displacement: f32, velocity: f32, viewport_width: f32, is_up: bool) -> ReleaseOutcome {
    let distance_fired = displacement.abs() > distance_threshold(viewport_width);
    let flick_fired = velocity.abs() > FLICK_TRIGGER_PX_PER_MS;

    if distance_fired || flick_fired {
        let sign = if displacement != 0.0 {
            displacement.signum()
        } else {
            velocity.signum()
        };
        let direction = if sign < 0.0 {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        let magnitude =
            (velocity.abs() * OVERSHOOT_PX_PER_VELOCITY).clamp(OVERSHOOT_MIN_PX, OVERSHOOT_MAX_PX);
        return ReleaseOutcome::Navigate {
            direction,
            plan: SettlePlan::navigate(sign * magnitude),
        };
    }

    if is_up && displacement.abs() < TAP_SLOP_PX && velocity.abs() <= FLICK_TRIGGER_PX_PER_MS {
        return ReleaseOutcome::Tap;
    }

    ReleaseOutcome::SnapBack {
        plan: SettlePlan::snap_back(displacement),
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
