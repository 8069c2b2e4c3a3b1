//! Raw pointer input as the host delivers it.

pub type PointerId = u64;

/// What the press landed on, decided by the host's hit test.
///
/// Presses on navigation or close controls are discrete clicks and never
/// enter the gesture machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HitTarget {
    #[default]
    Stage,
    Control,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample: identity, horizontal position, and the host's
/// timestamp in milliseconds.
///
/// Only the horizontal axis participates in the gesture; the slider track
/// moves along x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub x: f32,
    pub time_ms: u64,
    /// Meaningful on `Down` only; later samples follow the pressed pointer.
    pub target: HitTarget,
}

impl PointerEvent {
    pub fn down(id: PointerId, x: f32, time_ms: u64, target: HitTarget) -> Self {
        Self {
            id,
            kind: PointerEventKind::Down,
            x,
            time_ms,
            target,
        }
    }

    pub fn moved(id: PointerId, x: f32, time_ms: u64) -> Self {
        Self {
            id,
            kind: PointerEventKind::Move,
            x,
            time_ms,
            target: HitTarget::Stage,
        }
    }

    pub fn up(id: PointerId, x: f32, time_ms: u64) -> Self {
        Self {
            id,
            kind: PointerEventKind::Up,
            x,
            time_ms,
            target: HitTarget::Stage,
        }
    }

    pub fn cancel(id: PointerId, x: f32, time_ms: u64) -> Self {
        Self {
            id,
            kind: PointerEventKind::Cancel,
            x,
            time_ms,
            target: HitTarget::Stage,
        }
    }
}
