use crate::surface::TimerToken;
use crate::types::{Position, ScrollDirection, Vector, WheelBehavior};

/// Quiet period after which the scroll direction falls back to
/// [`ScrollDirection::None`] and prefetch padding turns symmetric again.
///
/// Measured in whatever time units the host feeds the event entry points
/// (milliseconds in practice).
pub const SCROLL_DIRECTION_RESET: u64 = 500;

/// Mutable scroll-tracking state, owned by the engine.
#[derive(Clone, Debug)]
pub(crate) struct ScrollState {
    pub(crate) wheel_behavior: WheelBehavior,
    pub(crate) position: Position,
    pub(crate) max_position: Position,
    pub(crate) direction: ScrollDirection,
    /// Timestamp of the last observed scroll notification.
    pub(crate) timestamp: Option<u64>,
    /// Wheel delta accumulated since the last render zeroed it.
    pub(crate) delta_since_render: Vector,
    /// Consumes the scroll notification echoed by a controlled write-back.
    pub(crate) ignore_next: bool,
    pub(crate) last_input: Option<u64>,
    pub(crate) reset_timer: Option<TimerToken>,
}

impl ScrollState {
    /// `position` must be the surface's actual scroll offset at construction
    /// time, so the first observed notification produces a real delta instead
    /// of a spurious jump from zero.
    pub(crate) fn new(wheel_behavior: WheelBehavior, position: Position) -> Self {
        Self {
            wheel_behavior,
            position,
            max_position: Position::ZERO,
            direction: ScrollDirection::None,
            timestamp: None,
            delta_since_render: Vector::ZERO,
            ignore_next: false,
            last_input: None,
            reset_timer: None,
        }
    }

    /// Records a surface-reported position and returns the delta from the
    /// previously observed one.
    pub(crate) fn observe(&mut self, next: Position, now: u64) -> Vector {
        let delta = Vector::new(next.x - self.position.x, next.y - self.position.y);
        self.position = next;
        self.timestamp = Some(now);
        delta
    }
}
